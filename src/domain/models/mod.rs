pub mod event;
pub mod guestbook;
pub mod rsvp;
