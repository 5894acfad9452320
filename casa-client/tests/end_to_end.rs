//! Client against a real casa server on an ephemeral port

use std::sync::Arc;
use std::time::Duration;

use casa_client::{
    Advance, CallBoard, ClientConfig, ClientError, HttpClient, ManualClock, TherapyScheduler,
};
use casa_server::{Config, ServerState, api};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::TicketError;
use shared::models::{
    EventCreate, Gender, MemberCreate, MemberType, MonthlyPaymentUpsert, TherapySessionCreate,
    TransactionCreate, TransactionKind,
};

async fn spawn_server() -> ClientConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::build_app(ServerState::initialize(&Config::default()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ClientConfig::new(format!("http://{addr}")).with_timeout(5)
}

async fn register(client: &HttpClient, name: &str, member_type: MemberType) -> String {
    client
        .create_member(&MemberCreate {
            name: name.to_string(),
            gender: Gender::Male,
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            phone: "11 97777-6666".to_string(),
            member_type,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_members_and_events() {
    let config = spawn_server().await;
    let client = config.build_http_client().unwrap();

    let joao = register(&client, "João Silva", MemberType::Trabalhador).await;
    register(&client, "Maria Souza", MemberType::Consulente).await;

    let workers = client.list_members(Some(MemberType::Trabalhador)).await.unwrap();
    assert_eq!(workers.len(), 1);
    assert_eq!(client.search_members("maria").await.unwrap().len(), 1);

    let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    let event = client
        .create_event(&EventCreate {
            title: "Gira".to_string(),
            date,
            description: String::new(),
        })
        .await
        .unwrap();
    let event = client.toggle_participant(&event, &joao).await.unwrap();
    assert_eq!(event.participants, vec![joao.clone()]);
    let event = client.toggle_participant(&event, &joao).await.unwrap();
    assert!(event.participants.is_empty());
    assert_eq!(client.list_events(Some(date)).await.unwrap().len(), 1);

    assert!(client.delete_member(&joao).await.unwrap());
    assert!(matches!(
        client.delete_member(&joao).await,
        Err(ClientError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_validation_message_surfaces() {
    let config = spawn_server().await;
    let client = config.build_http_client().unwrap();

    let err = client
        .create_member(&MemberCreate {
            name: "  ".to_string(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            phone: "1".to_string(),
            member_type: MemberType::Consulente,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)), "{err}");
}

#[tokio::test]
async fn test_schedule_and_call() {
    let config = spawn_server().await;
    let client = Arc::new(config.build_http_client().unwrap());
    let ana = register(&client, "Ana", MemberType::Consulente).await;
    let bia = register(&client, "Bia", MemberType::Consulente).await;

    let scheduler = TherapyScheduler::new(client.clone(), config.timezone);
    let first = scheduler.schedule(&ana, "4").await.unwrap();
    assert_eq!(first.session.ticket_number, 1);
    assert_eq!(first.therapies[3].current_tickets, vec![1]);

    let err = scheduler.schedule(&ana, "4").await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Rejected(TicketError::AlreadyScheduledToday { .. })
    ));

    // a submission from a stale snapshot is refused by the server
    let stale = client
        .create_session(&TherapySessionCreate {
            member_id: bia.clone(),
            therapy_id: "4".to_string(),
            date: None,
            ticket_number: Some(1),
        })
        .await
        .unwrap_err();
    assert!(matches!(stale, ClientError::Conflict(_)), "{stale}");

    let second = scheduler.schedule(&bia, "4").await.unwrap();
    assert_eq!(second.session.ticket_number, 2);

    let history = scheduler.member_history(&ana).await.unwrap();
    assert_eq!(history[3].count, 1);

    let clock = Arc::new(ManualClock::new());
    let mut board = CallBoard::new(
        client.clone(),
        clock.clone(),
        config.clone().with_call_cooldown(Duration::from_secs(1)),
    );
    board.refresh().await.unwrap();
    board.select_therapy("4").unwrap();
    // Reyki shows two calls at once
    assert_eq!(board.caller().current_calls().len(), 2);
    assert_eq!(board.advance().await.unwrap(), Advance::Idle);

    let third = scheduler
        .schedule(&register(&client, "Caio", MemberType::Consulente).await, "4")
        .await
        .unwrap();
    board.refresh().await.unwrap();
    board.select_therapy("4").unwrap();
    let Advance::Called(called) = board.advance().await.unwrap() else {
        panic!("expected a call");
    };
    assert_eq!(called.id, third.session.id);
    assert!(client.sessions_today().await.unwrap().iter().any(|s| s.id == called.id && s.called));

    let view = board.view().unwrap();
    assert_eq!(view.therapy_name, "Reyki");
    assert_eq!(view.current.last().unwrap().member_name.as_deref(), Some("Caio"));
}

#[tokio::test]
async fn test_dues_and_transactions() {
    let config = spawn_server().await;
    let client = config.build_http_client().unwrap();
    let member = register(&client, "Rui", MemberType::Trabalhador).await;

    let unpaid = client
        .upsert_payment(&MonthlyPaymentUpsert {
            member_id: member.clone(),
            month: "2026-03".to_string(),
            amount: Decimal::new(50, 0),
            paid: false,
        })
        .await
        .unwrap();
    assert!(unpaid.payment_date.is_none());

    let paid = client
        .upsert_payment(&MonthlyPaymentUpsert {
            member_id: member,
            month: "2026-03".to_string(),
            amount: Decimal::new(50, 0),
            paid: true,
        })
        .await
        .unwrap();
    assert_eq!(paid.id, unpaid.id);
    assert!(paid.payment_date.is_some());
    assert_eq!(client.list_payments(Some("2026-03")).await.unwrap().len(), 1);

    let tx = client
        .create_transaction(&TransactionCreate {
            kind: TransactionKind::Expense,
            description: "Velas".to_string(),
            amount: Decimal::new(1250, 2),
            date: None,
            category: Some("Material".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(client.list_transactions().await.unwrap().len(), 1);
    assert!(client.delete_transaction(&tx.id).await.unwrap());
    assert!(client.list_transactions().await.unwrap().is_empty());
}
