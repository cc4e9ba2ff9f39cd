use std::collections::HashSet;

use crate::context::Context;
use crate::error::TypeError;
use crate::syntax::{Term, Type};

/// Assign a type to `term` under `context`, or reject it.
pub fn type_check(term: &Term, context: &Context) -> Result<Type, TypeError> {
    infer(term, context, &HashSet::new())
}

// type_scope holds the type variables bound by enclosing type abstractions;
// substitution keeps clear of them when it has to rename.
fn infer(
    term: &Term,
    context: &Context,
    type_scope: &HashSet<String>,
) -> Result<Type, TypeError> {
    match term {
        Term::Variable(name) => context
            .lookup(name)
            .cloned()
            .ok_or_else(|| TypeError::UnknownVariable { name: name.clone() }),
        Term::Abstraction {
            param,
            param_type,
            body,
        } => {
            let inner = context.extend(param, param_type.clone());
            let body_type = infer(body, &inner, type_scope)?;
            Ok(Type::implication(param_type.clone(), body_type))
        }
        Term::Application { func, arg } => {
            let func_type = infer(func, context, type_scope)?;
            let arg_type = infer(arg, context, type_scope)?;
            func_type.apply(&arg_type)
        }
        Term::TypeAbstraction { param, body } => {
            let mut inner_scope = type_scope.clone();
            inner_scope.insert(param.clone());
            let body_type = infer(body, context, &inner_scope)?;
            Ok(Type::universal(param, body_type))
        }
        Term::TypeApplication { func, arg } => {
            let func_type = infer(func, context, type_scope)?;
            match func_type {
                Type::Universal { variable, body } => {
                    Ok(substitute(&body, &variable, arg, type_scope))
                }
                target => Err(TypeError::NotUniversal {
                    target,
                    argument: arg.clone(),
                }),
            }
        }
    }
}

/// Replace every free occurrence of `name` in `ty` with `replacement`.
///
/// A `forall` binder that occurs free in `replacement` is renamed before
/// descending under it, so no substituted occurrence can be captured.
/// `taken` holds names bound in the enclosing scope; fresh names also stay
/// clear of those.
pub fn substitute(ty: &Type, name: &str, replacement: &Type, taken: &HashSet<String>) -> Type {
    match ty {
        Type::Base(base) => {
            if base == name {
                replacement.clone()
            } else {
                ty.clone()
            }
        }
        Type::Implication(left, right) => Type::implication(
            substitute(left, name, replacement, taken),
            substitute(right, name, replacement, taken),
        ),
        Type::Universal { variable, body } => {
            if variable == name {
                // the binder shadows `name`
                return ty.clone();
            }
            let replacement_free = free_variables(replacement);
            if replacement_free.contains(variable) {
                let mut avoid = replacement_free;
                avoid.extend(free_variables(body));
                avoid.extend(taken.iter().cloned());
                avoid.insert(name.to_string());
                let fresh = fresh_name(variable, &avoid);
                let renamed = substitute(body, variable, &Type::base(&fresh), taken);
                Type::universal(&fresh, substitute(&renamed, name, replacement, taken))
            } else {
                Type::universal(variable, substitute(body, name, replacement, taken))
            }
        }
    }
}

/// Base names not bound by an enclosing `forall`.
pub fn free_variables(ty: &Type) -> HashSet<String> {
    match ty {
        Type::Base(name) => HashSet::from([name.clone()]),
        Type::Implication(left, right) => {
            let mut free = free_variables(left);
            free.extend(free_variables(right));
            free
        }
        Type::Universal { variable, body } => {
            let mut free = free_variables(body);
            free.remove(variable);
            free
        }
    }
}

// `_` is a word character, so renamed variables still scan
fn fresh_name(base: &str, avoid: &HashSet<String>) -> String {
    let mut candidate = format!("{base}_");
    while avoid.contains(&candidate) {
        candidate.push('_');
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_type;

    fn ty(source: &str) -> Type {
        parse_type(source).unwrap()
    }

    #[test]
    fn substitution_replaces_free_occurrences() {
        assert_eq!(
            substitute(&ty("a->(b->a)"), "a", &ty("c->c"), &HashSet::new()),
            ty("(c->c)->(b->(c->c))")
        );
    }

    #[test]
    fn substitution_stops_at_a_shadowing_binder() {
        assert_eq!(
            substitute(&ty("forall a. a->b"), "a", &ty("c"), &HashSet::new()),
            ty("forall a. a->b")
        );
    }

    #[test]
    fn substitution_renames_a_capturing_binder() {
        assert_eq!(
            substitute(&ty("forall b. a->b"), "a", &ty("b"), &HashSet::new()),
            ty("forall b_. b->b_")
        );
    }

    #[test]
    fn renaming_skips_names_in_scope() {
        let taken = HashSet::from(["b_".to_string()]);
        assert_eq!(
            substitute(&ty("forall b. a->b"), "a", &ty("b"), &taken),
            ty("forall b__. b->b__")
        );
    }

    #[test]
    fn free_variables_exclude_bound_ones() {
        assert_eq!(
            free_variables(&ty("forall a. a->b")),
            HashSet::from(["b".to_string()])
        );
    }
}
