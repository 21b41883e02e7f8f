// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface for the provisioning service.

pub mod pages;
pub mod server;

pub use server::{router, serve};
