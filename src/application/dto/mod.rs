//! # Data Transfer Objects

pub mod account_dto;
