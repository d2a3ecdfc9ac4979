use heck::ToPascalCase;

use crate::ir::NormalizedName;

/// Create a `NormalizedName` from an arbitrary schema name.
///
/// Schema names may contain path separators, `{i}` placeholders, or start
/// with a digit; every variant here is a legal identifier in its target
/// language's lexical rules.
pub fn normalize_name(name: &str) -> NormalizedName {
    let sanitized = sanitize_identifier(name);

    // Case conversion folds a guarding underscore away, so a digit-first
    // name needs the guard re-applied to stay a legal identifier.
    let mut pascal_case = sanitized.to_pascal_case();
    if pascal_case.starts_with(|c: char| c.is_ascii_digit()) {
        pascal_case.insert(0, '_');
    }

    NormalizedName {
        original: name.to_string(),
        pascal_case,
        identifier: sanitized,
    }
}

/// Lower-cased name with every non-alphanumeric character stripped.
///
/// Used for Go package names and Go file names.
pub fn flat_lower(name: &str) -> String {
    let flat: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if flat.is_empty() {
        return "model".to_string();
    }
    flat
}

/// Upper-cased name with every non-alphanumeric character stripped.
///
/// Used for C include-guard tokens.
pub fn flat_upper(name: &str) -> String {
    let flat: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_uppercase();
    if flat.is_empty() {
        return "MODEL".to_string();
    }
    flat
}

/// Sanitize a string to be a valid identifier, preserving the original casing.
fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_separator = false;

    for ch in name.chars() {
        if ch.is_alphanumeric() {
            // The guard keys on output position: whatever alphanumeric
            // lands first must not be a digit.
            if result.is_empty() {
                if ch.is_ascii_digit() {
                    result.push('_');
                }
            } else if prev_was_separator {
                result.push('_');
            }
            result.push(ch);
            prev_was_separator = false;
        } else {
            prev_was_separator = true;
        }
    }

    if result.is_empty() {
        return "unnamed".to_string();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        let n = normalize_name("TestObject");
        assert_eq!(n.original, "TestObject");
        assert_eq!(n.identifier, "TestObject");
        assert_eq!(n.pascal_case, "TestObject");
    }

    #[test]
    fn test_trailing_separator() {
        let n = normalize_name("DeviceInfo.");
        assert_eq!(n.original, "DeviceInfo.");
        assert_eq!(n.identifier, "DeviceInfo");
    }

    #[test]
    fn test_dotted_path_name() {
        let n = normalize_name("Device.WiFi");
        assert_eq!(n.identifier, "Device_WiFi");
        assert_eq!(n.pascal_case, "DeviceWiFi");
    }

    #[test]
    fn test_index_placeholder() {
        let n = normalize_name("Interface.{i}.");
        assert_eq!(n.identifier, "Interface_i");
    }

    #[test]
    fn test_leading_digit() {
        let n = normalize_name("3GPP");
        assert_eq!(n.identifier, "_3GPP");
        // Pascal-casing must not surface the digit again.
        assert_eq!(n.pascal_case, "_3gpp");
    }

    #[test]
    fn test_digit_first_after_separator() {
        let n = normalize_name(".11Config");
        assert_eq!(n.identifier, "_11Config");
        assert!(!n.pascal_case.starts_with(|c: char| c.is_ascii_digit()));

        let n = normalize_name("{2}X");
        assert_eq!(n.identifier, "_2_X");
    }

    #[test]
    fn test_empty_name() {
        let n = normalize_name("...");
        assert_eq!(n.identifier, "unnamed");
    }

    #[test]
    fn test_flat_lower() {
        assert_eq!(flat_lower("TestModel"), "testmodel");
        assert_eq!(flat_lower("Device:2.15"), "device215");
        assert_eq!(flat_lower("..."), "model");
    }

    #[test]
    fn test_flat_upper() {
        assert_eq!(flat_upper("TestModel"), "TESTMODEL");
        assert_eq!(flat_upper("tr-181"), "TR181");
        assert_eq!(flat_upper(""), "MODEL");
    }
}
