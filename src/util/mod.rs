use itertools::Itertools;

use crate::binder::ResolvedParameter;

/// Escapes the five HTML-special characters (`&`, `<`, `>`, `"`, `'`).
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Makes a driver error message safe to surface: HTML-escaped, with control
/// characters removed.
pub fn sanitize_driver_message(message: &str) -> String {
    escape_html(message)
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// One line per parameter: `<placeholder> <direction> <type>[ array][ <schema.type>]`.
pub fn pretty_parameters_string(params: &[ResolvedParameter]) -> String {
    params
        .iter()
        .map(|p| {
            let mut line = format!("{} {} {}", p.placeholder, p.direction, p.bind_type);
            if p.is_array() {
                line.push_str(" array");
            }
            if let Some(custom) = &p.custom_type {
                line.push(' ');
                line.push_str(&custom.to_string());
            }
            line
        })
        .join("\n")
}

#[cfg(test)]
mod util_test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::binder::ParameterBinder;

    #[test]
    fn test_sanitize_driver_message() {
        assert_eq!(
            sanitize_driver_message("ORA-06550: line 1, column 7:\n<PLS-00306> wrong \"args\"\r\n"),
            "ORA-06550: line 1, column 7:&lt;PLS-00306&gt; wrong &quot;args&quot;"
        );
        assert_eq!(sanitize_driver_message("a & b\t'c'"), "a &amp; b&#039;c&#039;");
    }

    #[test]
    fn test_pretty_parameters_string() {
        let params = json!({
            "p_addr": {"length": null, "type": "hr.address_t", "value": ["x"]},
            "p_ids": [1, 2],
            "p_total_out": {"length": 40, "type": null, "value": null},
        });
        let resolved = ParameterBinder::default()
            .bind_parameters(params.as_object().unwrap())
            .unwrap();

        let expected = vec![
            ":p_addr IN hr.address_t array hr.address_t",
            ":p_ids IN SQLT_INT array",
            ":p_total_out OUT SQLT_AFC",
        ];
        let output = pretty_parameters_string(&resolved);
        let actual: Vec<&str> = output.lines().collect();
        assert_eq!(expected, actual);
    }
}
