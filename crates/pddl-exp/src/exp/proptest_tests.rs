//! Property-based tests for comparison expressions using proptest.

use proptest::prelude::*;
use crate::error::ExpError;
use crate::lang::{ArithOp, Images, Substitution, Term, Variable};
use super::{Comp, EqualComp, Evaluable, FCompExp};

fn num(value: f64) -> Term {
    Term::number(value).unwrap()
}

/// Term description (before building)
#[derive(Debug, Clone)]
enum TermDesc {
    Var(u8),   // Variable index 0-3
    Const(u8), // Constant index 0-3
    Num(i8),   // Small integer literal
    Binary(u8, Box<TermDesc>, Box<TermDesc>), // Operator index 0-3
    Neg(Box<TermDesc>),
}

fn arb_leaf(ground: bool) -> BoxedStrategy<TermDesc> {
    if ground {
        prop_oneof![
            (0..4u8).prop_map(TermDesc::Const),
            (-5..5i8).prop_map(TermDesc::Num),
        ]
        .boxed()
    } else {
        prop_oneof![
            (0..4u8).prop_map(TermDesc::Var),
            (0..4u8).prop_map(TermDesc::Const),
            (-5..5i8).prop_map(TermDesc::Num),
        ]
        .boxed()
    }
}

fn arb_term_desc(max_depth: u32, ground: bool) -> BoxedStrategy<TermDesc> {
    if max_depth == 0 {
        arb_leaf(ground)
    } else {
        let sub = arb_term_desc(max_depth - 1, ground);
        prop_oneof![
            4 => arb_leaf(ground),
            2 => (0..4u8, sub.clone(), sub.clone())
                .prop_map(|(op, a, b)| TermDesc::Binary(op, Box::new(a), Box::new(b))),
            1 => sub.prop_map(|a| TermDesc::Neg(Box::new(a))),
        ]
        .boxed()
    }
}

/// Numeric-only description: numbers and arithmetic
fn arb_numeric_desc(max_depth: u32) -> BoxedStrategy<TermDesc> {
    let leaf = (-5..5i8).prop_map(TermDesc::Num);
    if max_depth == 0 {
        leaf.boxed()
    } else {
        let sub = arb_numeric_desc(max_depth - 1);
        prop_oneof![
            3 => leaf,
            2 => (0..4u8, sub.clone(), sub)
                .prop_map(|(op, a, b)| TermDesc::Binary(op, Box::new(a), Box::new(b))),
        ]
        .boxed()
    }
}

fn build_term(desc: &TermDesc) -> Term {
    match desc {
        TermDesc::Var(i) => Term::variable(format!("?x{}", i)),
        TermDesc::Const(i) => Term::constant(format!("c{}", i)),
        TermDesc::Num(n) => num(f64::from(*n)),
        TermDesc::Binary(op, a, b) => {
            let op = [ArithOp::Add, ArithOp::Subtract, ArithOp::Multiply, ArithOp::Divide]
                [*op as usize];
            Term::arithmetic(op, vec![build_term(a), build_term(b)]).unwrap()
        }
        TermDesc::Neg(a) => Term::arithmetic(ArithOp::Minus, vec![build_term(a)]).unwrap(),
    }
}

fn arb_comp() -> impl Strategy<Value = Comp> {
    (0..Comp::ALL.len()).prop_map(|i| Comp::ALL[i])
}

fn arb_exp(max_depth: u32, ground: bool) -> impl Strategy<Value = FCompExp> {
    (arb_comp(), arb_term_desc(max_depth, ground), arb_term_desc(max_depth, ground))
        .prop_map(|(op, a, b)| FCompExp::new(op, build_term(&a), build_term(&b)))
}

fn arb_substitution() -> impl Strategy<Value = Substitution> {
    proptest::collection::vec((0..4u8, arb_term_desc(2, false)), 0..4).prop_map(|bindings| {
        bindings
            .into_iter()
            .map(|(i, desc)| (Variable::new(format!("?x{}", i)), build_term(&desc)))
            .collect()
    })
}

proptest! {
    /// Equality of numbers is numeric equality
    #[test]
    fn equal_numbers(a in -1000i32..1000, b in -1000i32..1000) {
        let exp = EqualComp::new(num(f64::from(a)), num(f64::from(b)));
        prop_assert!(exp.is_evaluable());
        prop_assert_eq!(exp.evaluate().unwrap(), a == b);
    }

    /// Equality of constants is identity of their names
    #[test]
    fn equal_constants(a in "[a-c]{1,2}", b in "[a-c]{1,2}") {
        let exp = EqualComp::new(Term::constant(a.clone()), Term::constant(b.clone()));
        prop_assert!(exp.is_evaluable());
        prop_assert_eq!(exp.evaluate().unwrap(), a == b);
    }

    /// Both operands are reduced on their own before comparing
    #[test]
    fn operands_reduced_independently(
        op in arb_comp(),
        a in arb_numeric_desc(3),
        b in arb_numeric_desc(3),
    ) {
        let (t1, t2) = (build_term(&a), build_term(&b));
        let exp = FCompExp::new(op, t1.clone(), t2.clone());
        prop_assert!(exp.is_evaluable());
        match (t1.evaluate_numeric(), t2.evaluate_numeric()) {
            (Ok(n1), Ok(n2)) => prop_assert_eq!(exp.evaluate().unwrap(), op.compare(n1, n2)),
            _ => prop_assert!(matches!(exp.evaluate(), Err(ExpError::Arithmetic(_)))),
        }
    }

    /// Evaluability never lies about reachability: an evaluable expression
    /// only fails for arithmetic reasons, a non-evaluable one always fails
    #[test]
    fn evaluability_matches_evaluation(exp in arb_exp(2, false)) {
        let result = exp.evaluate();
        if exp.is_evaluable() {
            prop_assert!(!matches!(result, Err(ExpError::NotEvaluable(_))));
        } else {
            prop_assert!(matches!(result, Err(ExpError::NotEvaluable(_))));
        }
    }

    /// A bound variable disappears after substitution by a ground term
    #[test]
    fn apply_removes_bound_variable(exp in arb_exp(2, false), t in arb_term_desc(2, true)) {
        let ground = build_term(&t);
        let subst: Substitution = [(Variable::new("?x0"), ground.clone())].into_iter().collect();
        let result = exp.apply(&subst);
        prop_assert!(!result.occurs(&Term::variable("?x0")));

        let direct = FCompExp::new(exp.op(), Term::variable("?x0"), Term::variable("?x0"));
        prop_assert_eq!(direct.apply(&subst), FCompExp::new(exp.op(), ground.clone(), ground));
    }

    /// Substitution leaves ground expressions unchanged
    #[test]
    fn apply_ground_is_identity(exp in arb_exp(3, true), subst in arb_substitution()) {
        prop_assert_eq!(exp.apply(&subst), exp);
    }

    /// Standardization is the renaming recorded in its images
    #[test]
    fn standardize_is_consistent_renaming(exp in arb_exp(3, false)) {
        let mut images = Images::new();
        let standardized = exp.standardize_with(&mut images);

        let renaming: Substitution = images
            .iter()
            .map(|(original, image)| (Variable::new(original), Term::variable(image)))
            .collect();
        prop_assert_eq!(&standardized, &exp.apply(&renaming));
        prop_assert_eq!(standardized.variables().len(), exp.variables().len());
        for var in exp.variables() {
            prop_assert!(images.get(&var.name).is_some());
        }
    }

    /// A clone is equal to its source and deriving from it leaves the source intact
    #[test]
    fn clone_independence(exp in arb_exp(3, false), subst in arb_substitution()) {
        let copy = exp.clone();
        prop_assert_eq!(&copy, &exp);

        let before = exp.to_string();
        let _derived = copy.apply(&subst).standardize();
        prop_assert_eq!(exp.to_string(), before);
    }
}
