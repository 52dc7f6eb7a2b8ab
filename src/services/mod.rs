// Service module exports

pub mod access;
pub mod calendar;
pub mod config;
pub mod geo;
pub mod rsvp;
