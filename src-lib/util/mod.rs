// This file is part of picker-kernel and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2023 Michael Ripley

//! Various utilities

pub mod custom_serializer;
pub mod image;
pub mod numeric;
