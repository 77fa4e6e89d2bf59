// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::ToolError;
use crate::traits::Tool;

const NO_EXPRESSION: &str = "no valid mathematical expression found";

/// Math tool - evaluates the first binary arithmetic expression in the input.
///
/// The input may be free text ("What is 12 * 3?"); the first run of digits
/// and operators is extracted and a single `+`, `-`, `*` or `/` is applied.
/// Anything after a second operator is ignored.
pub struct MathTool;

impl MathTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MathTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for MathTool {
    async fn process(&self, input: &str) -> Result<String, ToolError> {
        let expr = extract_first_expression(input)
            .ok_or_else(|| ToolError::invalid_input(NO_EXPRESSION))?;
        tracing::debug!(expression = %expr, "Extracted expression");

        let (lhs, rhs, operator) = parse_expression(&expr).map_err(ToolError::invalid_input)?;

        let result = match operator {
            '+' => lhs + rhs,
            '-' => lhs - rhs,
            '*' => lhs * rhs,
            '/' if rhs == 0.0 => return Err(ToolError::DivisionByZero),
            '/' => lhs / rhs,
            other => {
                return Err(ToolError::invalid_input(format!(
                    "unsupported operator: {}",
                    other
                )))
            }
        };

        Ok(format_general(result))
    }

    fn name(&self) -> &'static str {
        "math"
    }
}

fn extract_first_expression(input: &str) -> Option<String> {
    let input = input.trim().trim_matches('"');
    try_extract_expression(input)
}

/// Collect digits and operators from free text, stopping at the first word
/// that follows a complete operator.
fn try_extract_expression(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut expr = String::new();
    let mut last_char = None;
    let mut in_number = false;
    let mut has_operator = false;
    let mut found_digit = false;

    for (i, ch) in input.char_indices() {
        match ch {
            c if c.is_ascii_digit() || c == '.' => {
                expr.push(c);
                in_number = true;
                found_digit = true;
            }
            '-' => {
                // A minus not preceded by a digit is a sign.
                if i == 0 || !bytes[i - 1].is_ascii_digit() {
                    expr.push('-');
                    in_number = false;
                } else if in_number {
                    expr.push('-');
                    has_operator = true;
                    in_number = false;
                }
            }
            '+' | '*' | '/' => {
                if found_digit {
                    expr.push(ch);
                    has_operator = true;
                    in_number = false;
                }
            }
            c if c.is_whitespace() => continue,
            _ => {
                if !found_digit || (!in_number && !has_operator) {
                    continue;
                }
                if has_operator && !in_number {
                    return None;
                }
            }
        }
        last_char = Some(ch);
    }

    if expr.is_empty() {
        return None;
    }

    if matches!(last_char, Some('+' | '-' | '*' | '/')) {
        expr.pop();
    }

    parse_expression(&expr).ok()?;
    Some(expr)
}

fn find_operator(expr: &str) -> Option<usize> {
    let bytes = expr.as_bytes();
    bytes.iter().enumerate().position(|(i, &c)| {
        matches!(c, b'+' | b'*' | b'/') || (c == b'-' && i > 0 && bytes[i - 1].is_ascii_digit())
    })
}

fn parse_expression(expr: &str) -> Result<(f64, f64, char), String> {
    let expr: String = expr.chars().filter(|c| *c != ' ' && *c != '"').collect();

    let index = find_operator(&expr).ok_or_else(|| "no valid operator found".to_string())?;
    let operator = char::from(expr.as_bytes()[index]);
    let first = &expr[..index];
    let mut second = &expr[index + 1..];

    let lhs: f64 = first
        .parse()
        .map_err(|e| format!("invalid first number: {}", e))?;

    if let Some(next) = find_operator(second) {
        second = &second[..next];
    }

    let rhs: f64 = second
        .parse()
        .map_err(|e| format!("invalid second number: {}", e))?;

    Ok((lhs, rhs, operator))
}

/// Format like C's `%g` with the shortest round-trip digits: plain decimal
/// for exponents in `-4..6`, otherwise `d.ddde±XX`.
fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..6).contains(&exponent) {
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
