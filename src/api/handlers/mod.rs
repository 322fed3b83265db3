pub mod guestbook;
pub mod health;
pub mod rsvp;
pub mod schedule;
