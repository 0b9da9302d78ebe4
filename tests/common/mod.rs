//! Shared fixtures for integration tests.

use chrono::Utc;
use limpiar_portal::models::{
    Account, PropertyRef, ServiceSelection, Ticket, TicketStatus, UserRole,
};

pub fn service(id: &str, name: &str, price: i64) -> ServiceSelection {
    ServiceSelection {
        id: id.to_string(),
        name: name.to_string(),
        image: "x".to_string(),
        price,
    }
}

pub fn property_ref(id: &str, name: &str) -> PropertyRef {
    PropertyRef {
        id: id.to_string(),
        name: name.to_string(),
        image: "y".to_string(),
    }
}

pub fn open_ticket(id: &str) -> Ticket {
    Ticket {
        id: id.to_string(),
        title: "Stained carpet".to_string(),
        description: "Carpet on floor 2 needs attention".to_string(),
        category: "cleaning".to_string(),
        status: TicketStatus::Open,
        created_at: Utc::now(),
        user_id: "u1".to_string(),
        user_avatar: None,
    }
}

pub fn account(id: &str, name: &str) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", id),
        role: UserRole::PropertyManager,
        avatar_url: None,
    }
}
