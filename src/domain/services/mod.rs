pub mod calendar;
pub mod countdown;
pub mod guestbook_service;
pub mod rate_limiter;
pub mod rsvp_service;
pub mod sanitizer;
pub mod validation;
