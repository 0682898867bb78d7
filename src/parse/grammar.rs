use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, opt, preceded, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Action, ActionKind, Condition, FieldLabels, Operator, Rule};

use super::parser::ParsedRules;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Identifiers ------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1, |c: char| c.is_ascii_alphanumeric() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
        }),
    )
        .take()
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn number(input: &mut &str) -> ModalResult<String> {
    (
        opt('-'),
        take_while(1.., |c: char| c.is_ascii_digit()),
        opt(('.', take_while(1.., |c: char| c.is_ascii_digit()))),
    )
        .take()
        .map(str::to_owned)
        .parse_next(input)
}

fn value(input: &mut &str) -> ModalResult<String> {
    ws.parse_next(input)?;
    alt((string_literal, number))
        .context(StrContext::Expected(StrContextValue::Description("value")))
        .parse_next(input)
}

// -- Conditions -------------------------------------------------------------

fn operator(input: &mut &str) -> ModalResult<Operator> {
    ws.parse_next(input)?;
    alt((
        "is-not-empty".value(Operator::IsNotEmpty),
        "is-empty".value(Operator::IsEmpty),
        "not-equals".value(Operator::NotEquals),
        "not-contains".value(Operator::NotContains),
        "equals".value(Operator::Equals),
        "contains".value(Operator::Contains),
        "greater-than".value(Operator::GreaterThan),
        "less-than".value(Operator::LessThan),
        "==".value(Operator::Equals),
        "!=".value(Operator::NotEquals),
        ">".value(Operator::GreaterThan),
        "<".value(Operator::LessThan),
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "operator",
    )))
    .parse_next(input)
}

fn condition(input: &mut &str) -> ModalResult<Condition> {
    ws.parse_next(input)?;
    let field = ident
        .context(StrContext::Expected(StrContextValue::Description(
            "field id",
        )))
        .parse_next(input)?;
    let op = cut_err(operator).parse_next(input)?;
    let val = if op.is_unary() {
        None
    } else {
        Some(cut_err(value).parse_next(input)?)
    };
    Ok(Condition::new(field, op, val))
}

fn when_clause(input: &mut &str) -> ModalResult<Vec<Condition>> {
    (ws, "when").parse_next(input)?;
    let first = cut_err(condition).parse_next(input)?;
    let rest: Vec<Condition> =
        repeat(0.., preceded((ws, "and"), cut_err(condition))).parse_next(input)?;
    Ok(std::iter::once(first).chain(rest).collect())
}

// -- Actions ----------------------------------------------------------------

fn action_kind(input: &mut &str) -> ModalResult<ActionKind> {
    ws.parse_next(input)?;
    alt((
        "set-value".value(ActionKind::SetValue),
        "show".value(ActionKind::Show),
        "hide".value(ActionKind::Hide),
        "enable".value(ActionKind::Enable),
        "disable".value(ActionKind::Disable),
        "require".value(ActionKind::Require),
        "navigate".value(ActionKind::Navigate),
    ))
    .context(StrContext::Expected(StrContextValue::Description("action")))
    .parse_next(input)
}

fn action(input: &mut &str) -> ModalResult<Action> {
    let kind = action_kind.parse_next(input)?;
    ws.parse_next(input)?;
    let target = cut_err(ident)
        .context(StrContext::Expected(StrContextValue::Description(
            "target field id",
        )))
        .parse_next(input)?;
    let val = match kind {
        ActionKind::SetValue => Some(cut_err(value).parse_next(input)?),
        ActionKind::Navigate => opt(value).parse_next(input)?,
        _ => None,
    };
    Ok(Action {
        kind,
        target_id: target.to_owned(),
        value: val,
    })
}

fn then_clause(input: &mut &str) -> ModalResult<Vec<Action>> {
    (ws, "then").parse_next(input)?;
    let first = cut_err(action).parse_next(input)?;
    let rest: Vec<Action> = repeat(0.., preceded((ws, ','), cut_err(action))).parse_next(input)?;
    Ok(std::iter::once(first).chain(rest).collect())
}

// -- Definitions ------------------------------------------------------------

enum Definition {
    Rule(Rule),
    Label(String, String),
}

fn rule_def(input: &mut &str) -> ModalResult<Definition> {
    ws.parse_next(input)?;
    "rule".parse_next(input)?;
    ws.parse_next(input)?;

    let id = cut_err(ident)
        .context(StrContext::Expected(StrContextValue::Description(
            "rule id",
        )))
        .parse_next(input)?;
    let name = opt(preceded(ws, string_literal)).parse_next(input)?;
    let disabled = opt((ws, "disabled")).parse_next(input)?.is_some();
    let trigger = opt(preceded((ws, "on", ws), ident)).parse_next(input)?;

    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;

    let conditions = opt(when_clause).parse_next(input)?.unwrap_or_default();
    let actions = cut_err(then_clause)
        .context(StrContext::Expected(StrContextValue::Description(
            "then clause",
        )))
        .parse_next(input)?;

    Ok(Definition::Rule(Rule {
        id: id.to_owned(),
        name: name.unwrap_or_else(|| id.to_owned()),
        enabled: !disabled,
        conditions,
        actions,
        trigger_field: trigger.map(str::to_owned),
    }))
}

fn label_def(input: &mut &str) -> ModalResult<Definition> {
    ws.parse_next(input)?;
    "label".parse_next(input)?;
    ws.parse_next(input)?;
    let field = cut_err(ident).parse_next(input)?;
    ws.parse_next(input)?;
    let text = cut_err(string_literal)
        .context(StrContext::Expected(StrContextValue::Description(
            "label text",
        )))
        .parse_next(input)?;
    Ok(Definition::Label(field.to_owned(), text))
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_rules(input: &mut &str) -> ModalResult<ParsedRules> {
    let mut rules = Vec::new();
    let mut labels = FieldLabels::new();

    let defs: Vec<Definition> = repeat(0.., alt((rule_def, label_def))).parse_next(input)?;
    for def in defs {
        match def {
            Definition::Rule(rule) => rules.push(rule),
            Definition::Label(field, text) => labels.insert(&field, &text),
        }
    }

    ws.parse_next(input)?;

    Ok(ParsedRules { rules, labels })
}
