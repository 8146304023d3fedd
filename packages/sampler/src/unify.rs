/// Map a canonical type spelling to its display label
///
/// Array suffixes, generic arguments and the package qualifier are dropped, then
/// the simple name is folded case-insensitively onto a small set of labels
/// (`int`, `Integer` and `BigInteger` all become `Integer`). Names outside the
/// set come back as their simple name.
pub fn unify_type(canonical: &str) -> String {
    let raw = canonical.split('<').next().unwrap_or(canonical).replace("[]", "");
    let simple = raw.rsplit('.').next().unwrap_or(raw.as_str()).trim();

    let label = match simple.to_ascii_lowercase().as_str() {
        "byte" => "Byte",
        "short" => "Short",
        "int" | "integer" | "biginteger" => "Integer",
        "long" => "Long",
        "float" => "Float",
        "double" | "bigdecimal" => "Double",
        "boolean" => "Boolean",
        "char" | "character" => "Character",
        "string" => "String",
        "date" | "localdate" | "localdatetime" | "zoneddatetime" => "Date",
        "file" | "multipartfile" => "File",
        "object" => "Object",
        "enum" => "Enum",
        _ => return simple.to_string(),
    };
    label.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_family() {
        assert_eq!(unify_type("int"), "Integer");
        assert_eq!(unify_type("java.lang.Integer"), "Integer");
        assert_eq!(unify_type("java.math.BigInteger"), "Integer");
    }

    #[test]
    fn test_case_insensitive_primitives() {
        assert_eq!(unify_type("byte"), "Byte");
        assert_eq!(unify_type("java.lang.Byte"), "Byte");
        assert_eq!(unify_type("short"), "Short");
        assert_eq!(unify_type("long"), "Long");
        assert_eq!(unify_type("java.lang.Long"), "Long");
        assert_eq!(unify_type("float"), "Float");
        assert_eq!(unify_type("boolean"), "Boolean");
        assert_eq!(unify_type("char"), "Character");
        assert_eq!(unify_type("java.lang.Character"), "Character");
    }

    #[test]
    fn test_decimal_family() {
        assert_eq!(unify_type("double"), "Double");
        assert_eq!(unify_type("java.math.BigDecimal"), "Double");
    }

    #[test]
    fn test_temporal_and_file() {
        assert_eq!(unify_type("java.util.Date"), "Date");
        assert_eq!(unify_type("java.time.LocalDate"), "Date");
        assert_eq!(unify_type("java.time.LocalDateTime"), "Date");
        assert_eq!(unify_type("java.time.ZonedDateTime"), "Date");
        assert_eq!(unify_type("java.io.File"), "File");
        assert_eq!(unify_type("org.springframework.web.multipart.MultipartFile"), "File");
    }

    #[test]
    fn test_strips_arrays_and_generics() {
        assert_eq!(unify_type("int[][]"), "Integer");
        assert_eq!(unify_type("java.lang.Enum<com.acme.Status>"), "Enum");
    }

    #[test]
    fn test_unknown_names_keep_simple_name() {
        assert_eq!(unify_type("com.acme.Status"), "Status");
        assert_eq!(unify_type("java.util.UUID"), "UUID");
        assert_eq!(unify_type("java.time.Instant"), "Instant");
    }
}
