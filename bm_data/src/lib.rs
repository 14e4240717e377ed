// Copyright 2018 Chia Network Inc and POA Networks Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
#![deny(unsafe_code)]

pub mod bignum;
pub mod bignum_ops;
pub mod data;
pub mod error;
pub mod hex;
pub mod sync;


pub use self::bignum::Bignum;
pub use self::data::Data;
pub use self::error::{DataError, Result};
pub use self::sync::{ByteSync, FixedBytes, NoSync};
