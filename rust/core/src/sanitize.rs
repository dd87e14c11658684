// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifier sanitization shared by link, joint and material naming.

/// Sanitize a name into a valid URDF identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, a leading digit
/// gets a `_` prefix, and the result is lower-cased.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 && ch.is_ascii_digit() {
            out.push('_');
        }
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push('_');
        }
    }
    out
}

/// Derive the robot name from an assembly name: whitespace runs become
/// a single `_`, and the result is lower-cased.
pub fn robot_name(assembly_name: &str) -> String {
    let mut out = String::with_capacity(assembly_name.len());
    let mut in_whitespace = false;
    for ch in assembly_name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(ch.to_ascii_lowercase());
            in_whitespace = false;
        }
    }
    out
}
