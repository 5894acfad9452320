//! Protected screens and the level each one requires

use crate::models::AccessLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    MemberRegistration,
    EventsControl,
    Birthdays,
    TherapyScheduling,
    TicketCall,
    MonthlyPayments,
    FinancialControl,
    Reports,
}

impl Screen {
    pub const ALL: [Screen; 8] = [
        Screen::MemberRegistration,
        Screen::EventsControl,
        Screen::Birthdays,
        Screen::TherapyScheduling,
        Screen::TicketCall,
        Screen::MonthlyPayments,
        Screen::FinancialControl,
        Screen::Reports,
    ];

    /// Screen id used in privilege records
    pub fn id(&self) -> &'static str {
        match self {
            Self::MemberRegistration => "member-registration",
            Self::EventsControl => "events-control",
            Self::Birthdays => "birthdays",
            Self::TherapyScheduling => "therapy-scheduling",
            Self::TicketCall => "ticket-call",
            Self::MonthlyPayments => "monthly-payments",
            Self::FinancialControl => "financial-control",
            Self::Reports => "reports",
        }
    }

    pub fn required_level(&self) -> AccessLevel {
        match self {
            Self::Birthdays | Self::TicketCall | Self::Reports => AccessLevel::View,
            _ => AccessLevel::Edit,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}
