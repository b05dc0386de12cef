/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generation of `ClientRequestToken` values for operations that are safe to retry.

use std::fmt;
use std::sync::{Arc, Mutex};

/// Format 128 bits of randomness as a version 4 UUID.
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        // UUID version character
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            // RFC 4122 variant: the top two bits are `10`
            if str_idx == 19 {
                dat = (dat & 0b00000011) | 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Produces idempotency tokens for inputs that leave `ClientRequestToken` unset.
///
/// Cloning shares the underlying generator.
#[derive(Clone, Debug)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Static(&'static str),
    Random(Arc<Mutex<fastrand::Rng>>),
}

impl fmt::Debug for Inner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inner::Static(token) => f.debug_tuple("Static").field(token).finish(),
            Inner::Random(_) => f.write_str("Random"),
        }
    }
}

impl IdempotencyTokenProvider {
    pub fn random() -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::new()))),
        }
    }

    /// A deterministic sequence of tokens
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Random(Arc::new(Mutex::new(fastrand::Rng::with_seed(seed)))),
        }
    }

    /// Always returns `token`
    pub fn fixed(token: &'static str) -> Self {
        Self {
            inner: Inner::Static(token),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.to_string(),
            Inner::Random(rng) => {
                let input: u128 = match rng.lock() {
                    Ok(rng) => rng.u128(..),
                    // the generator state is still usable after a panic elsewhere
                    Err(poisoned) => poisoned.into_inner().u128(..),
                };
                uuid_v4(input)
            }
        }
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        IdempotencyTokenProvider::random()
    }
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self::fixed(token)
    }
}
