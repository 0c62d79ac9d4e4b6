use kiwiland_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a node name: a single ASCII letter
pub fn parse_node_name(s: &str) -> std::result::Result<String, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(s.to_string()),
        _ => Err(format!("invalid node name {s:?}: expected a single letter")),
    }
}
