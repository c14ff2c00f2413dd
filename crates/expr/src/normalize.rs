//! Source rewriting applied before parsing.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::context::VARIABLES;

/// Rewrites the input into plain `evalexpr` syntax.
///
/// - number literals become reals: `1/2` becomes `1.0/2.0`
/// - implicit products become explicit: `2x`, `x(x + 1)` and `(x + 1)(x - 1)`
/// - chained powers group from the right: `x^2^3` becomes `x^(2.0^3.0)`
///
/// Digits inside names such as `log10` are left alone. Literals that do not
/// parse as `f64` are copied unchanged so the parser reports them.
pub(crate) fn normalize(input: &str) -> String {
    group_powers(&explicit(input))
}

/// Rewrites number literals and inserts the implicit `*`.
fn explicit(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    let mut chars = input.char_indices().peekable();
    let mut in_name = false;
    let mut name_start = 0;

    while let Some(&(start, c)) = chars.peek() {
        if !in_name && starts_number(&input[start..]) {
            let end = scan_number(&mut chars, input);
            let literal = &input[start..end];
            match literal.parse::<f64>() {
                Ok(value) => push_real(&mut out, value),
                Err(_) => out.push_str(literal),
            }
            if implies_product(input[end..].trim_start()) {
                out.push('*');
            }
            continue;
        }

        let part_of_name = is_name_char(c, in_name);
        if part_of_name && !in_name {
            name_start = start;
        }
        in_name = part_of_name;
        out.push(c);
        chars.next();

        let end = start + c.len_utf8();
        let rest = &input[end..];
        let next = rest.trim_start();
        let name_ends = in_name && !rest.starts_with(|n: char| is_name_char(n, true));
        if name_ends && VARIABLES.contains(&&input[name_start..end]) {
            // `x(x + 1)`: variables are never called.
            if next.starts_with('(') {
                out.push('*');
            }
        } else if c == ')' && (implies_product(next) || starts_number(next)) {
            out.push('*');
        }
    }

    out
}

fn is_name_char(c: char, in_name: bool) -> bool {
    c.is_alphanumeric() || c == '_' || (in_name && c == ':')
}

/// Wraps the right operand of every chained `^` in parentheses.
///
/// `evalexpr` groups `a^b^c` as `(a^b)^c`; the usual reading is `a^(b^c)`.
fn group_powers(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 8);
    let mut closes: Vec<usize> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        push_closes(&mut out, &mut closes, i);
        out.push(c);
        if c != '^' {
            continue;
        }

        let operand_end = operand_end(&chars, i + 1);
        if next_non_space(&chars, operand_end) == Some('^') {
            out.push('(');
            closes.push(chain_end(&chars, operand_end));
        }
    }
    push_closes(&mut out, &mut closes, chars.len());

    out
}

fn push_closes(out: &mut String, closes: &mut Vec<usize>, at: usize) {
    closes.retain(|&close| {
        if close == at {
            out.push(')');
            false
        } else {
            true
        }
    });
}

/// End of a `^`-chain whose first operand ends at `from`.
fn chain_end(chars: &[char], mut from: usize) -> usize {
    loop {
        let caret = skip_spaces(chars, from);
        if chars.get(caret) != Some(&'^') {
            return from;
        }
        from = operand_end(chars, caret + 1);
    }
}

/// End of the power operand starting at `from`: signs, then a name, number,
/// call or parenthesized group.
fn operand_end(chars: &[char], from: usize) -> usize {
    let mut i = skip_spaces(chars, from);
    while matches!(chars.get(i), Some('+' | '-')) {
        i = skip_spaces(chars, i + 1);
    }

    if chars.get(i) == Some(&'(') {
        return group_end(chars, i);
    }

    let atom_start = i;
    while chars
        .get(i)
        .is_some_and(|&c| is_name_char(c, true) || c == '.')
    {
        i += 1;
    }
    if i > atom_start {
        let call = skip_spaces(chars, i);
        if chars.get(call) == Some(&'(') {
            return group_end(chars, call);
        }
    }
    i
}

/// End of the parenthesized group opening at `open`, or the input end if unbalanced.
fn group_end(chars: &[char], open: usize) -> usize {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
    }
    chars.len()
}

fn skip_spaces(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }
    i
}

fn next_non_space(chars: &[char], i: usize) -> Option<char> {
    chars.get(skip_spaces(chars, i)).copied()
}

fn starts_number(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    match bytes {
        [b'.', next, ..] => next.is_ascii_digit(),
        [first, ..] => first.is_ascii_digit(),
        [] => false,
    }
}

/// Consumes `digits [. digits] [e [+-] digits]` and returns the end offset.
fn scan_number(chars: &mut Peekable<CharIndices<'_>>, input: &str) -> usize {
    let mut end = input.len();
    let mut seen_dot = false;

    while let Some(&(i, c)) = chars.peek() {
        if c.is_ascii_digit() || (c == '.' && !seen_dot) {
            seen_dot |= c == '.';
            chars.next();
            continue;
        }
        if matches!(c, 'e' | 'E') && exponent_len(&input[i + 1..]) > 0 {
            let len = 1 + exponent_len(&input[i + 1..]);
            for _ in 0..len {
                chars.next();
            }
            return i + len;
        }
        end = i;
        break;
    }

    end
}

/// Length of `[+-] digits` at the start of `rest`, or zero if there are no digits.
fn exponent_len(rest: &str) -> usize {
    let sign = usize::from(rest.starts_with(['+', '-']));
    let digits = rest[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 { 0 } else { sign + digits }
}

fn implies_product(rest: &str) -> bool {
    rest.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '(')
}

fn push_real(out: &mut String, value: f64) {
    let text = value.to_string();
    let is_integral = !text.contains(['.', 'e', 'E', 'i', 'N']);
    out.push_str(&text);
    if is_integral {
        out.push_str(".0");
    }
}
