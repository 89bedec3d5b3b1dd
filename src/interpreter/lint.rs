use std::collections::HashMap;

use log::debug;

use crate::{
    ast::{Condition, Location, PrintValue, Program, Statement},
    error::Diagnostic,
};

/// Names in the order they were first seen, each with one location.
#[derive(Default)]
struct Names {
    order:     Vec<String>,
    locations: HashMap<String, Location>,
}

impl Names {
    /// Records `loc` only for a name not seen before.
    fn insert_first(&mut self, name: &str, loc: Location) {
        if !self.locations.contains_key(name) {
            self.set(name, loc);
        }
    }

    /// Records `loc`, replacing an earlier one. The name keeps its place.
    fn set(&mut self, name: &str, loc: Location) {
        if self.locations.insert(name.to_string(), loc).is_none() {
            self.order.push(name.to_string());
        }
    }

    fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, Location)> {
        self.order
            .iter()
            .filter_map(|name| self.locations.get(name).map(|loc| (name.as_str(), *loc)))
    }
}

#[derive(Default)]
struct Analysis {
    declared: Names,
    used:     Names,
    loops:    Vec<Diagnostic>,
}

impl Analysis {
    fn mark_used<'a>(&mut self, names: impl Iterator<Item = &'a str>, loc: Location) {
        for name in names {
            self.used.insert_first(name, loc);
        }
    }

    fn mark_condition(&mut self, condition: &Condition, loc: Location) {
        let names = [condition.left.name(), condition.right.name()];
        self.mark_used(names.into_iter().flatten(), loc);
    }

    fn walk(&mut self, statements: &[Statement]) {
        for statement in statements {
            self.walk_statement(statement);
        }
    }

    fn walk_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Declaration { name, value, loc } => {
                self.declared.set(name, *loc);
                self.mark_used(value.identifiers(), *loc);
            },
            Statement::Print { value, loc } => {
                if let PrintValue::Expression(expression) = value {
                    self.mark_used(expression.identifiers(), *loc);
                }
            },
            Statement::Conditional { condition,
                                     body,
                                     else_body,
                                     loc, } => {
                self.mark_condition(condition, *loc);
                self.walk(body);
                self.walk(else_body);
            },
            Statement::Loop { condition, body, loc } => {
                self.mark_condition(condition, *loc);
                self.walk(body);

                let variable = condition.left.to_string();
                let updated = body.iter().any(|child| {
                                              matches!(child,
                                                       Statement::Declaration { name, .. }
                                                       if *name == variable)
                                          });
                if !updated {
                    let message = format!("Loop variable '{variable}' is never updated inside \
                                           the loop (possible infinite loop).");
                    self.loops.push(Diagnostic::warning(message, *loc));
                }
            },
        }
    }
}

/// Checks a parsed program for likely mistakes.
///
/// Never fails; every finding is a warning. Reports, in this order:
/// - loops whose left comparison operand is not re-declared directly inside
///   the loop body, inner loops first,
/// - variables that are declared but never used, at their last
///   declaration,
/// - names that are used but never declared, at their first use.
///
/// Unused variables are listed in the order they were first declared.
/// A name counts as used when it appears in a declaration's expression, a
/// printed expression or a comparison. Uses are located at the enclosing
/// statement.
///
/// # Example
/// ```
/// use likho::interpreter::{lexer::lex, lint::lint, parser::core::parse};
///
/// let program = parse(lex("maano x = 1\nmaano y = 2\nlikho y").unwrap()).unwrap();
/// let warnings = lint(&program);
///
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].message, "Variable 'x' is declared but never used.");
/// assert_eq!((warnings[0].line, warnings[0].column), (1, 1));
/// ```
#[must_use]
pub fn lint(program: &Program) -> Vec<Diagnostic> {
    let mut analysis = Analysis::default();
    analysis.walk(&program.body);

    let Analysis { declared,
                   used,
                   loops, } = analysis;

    let unused = declared.iter()
                         .filter(|(name, _)| !used.contains(name))
                         .map(|(name, loc)| {
                             Diagnostic::warning(format!("Variable '{name}' is declared but never used."),
                                                 loc)
                         });
    let undeclared = used.iter()
                         .filter(|(name, _)| !declared.contains(name))
                         .map(|(name, loc)| {
                             Diagnostic::warning(format!("Variable '{name}' is used before declaration."),
                                                 loc)
                         });

    let warnings: Vec<Diagnostic> = loops.into_iter().chain(unused).chain(undeclared).collect();
    debug!("lint produced {} warnings", warnings.len());
    warnings
}
