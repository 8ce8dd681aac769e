// Copyright (C) Pavlo Hrytsenko <pashagricenko@gmail.com>
// SPDX-License-Identifier: GPL-3.0-or-later

/// Encode a name for use inside a fragment URI.
///
/// Only `#` needs escaping: it would otherwise terminate the fragment part.
/// A full percent-encoding pass can be added here if a broader character set
/// ever shows up in exported names.
pub fn url_encode(data: &str) -> String {
    data.replace('#', "%23")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_escaped() {
        assert_eq!(url_encode("Cube#1"), "Cube%231");
        assert_eq!(url_encode("#a#b"), "%23a%23b");
    }

    #[test]
    fn test_plain_names_pass_through() {
        assert_eq!(url_encode("Armature.001"), "Armature.001");
        assert_eq!(url_encode(""), "");
    }
}
