// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Team provisioning: the ordered creation sequence and kubeconfig rendering.

pub mod engine;
pub mod kubeconfig;

pub use engine::TeamProvisioner;
pub use kubeconfig::{render_kubeconfig, KubeconfigParams};
