//! Entity <-> model mappers

mod bookmark;
mod collection;
mod comment;
mod contact;
mod follow;
mod game;
mod profile;
mod reaction;
mod report;
mod score;
