// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Identity of the invoking user.

use crate::Invocation;

/// `whoami`
pub fn current_user() -> Invocation {
    Invocation::new("whoami")
}
