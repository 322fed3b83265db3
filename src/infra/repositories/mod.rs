pub mod memory_guestbook_repo;
pub mod memory_rsvp_repo;
