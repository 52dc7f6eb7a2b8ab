// Module exports for models

pub mod calendar;
pub mod config;
pub mod faq;
pub mod geo;
pub mod rsvp;
pub mod schedule;
