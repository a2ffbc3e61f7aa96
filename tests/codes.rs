//! End-to-end tests for codes, complements and the self-orthogonal search.

use gf4codes::construct::{BruteForce, CodeGenerator, Complement, LinearSolve, OrthogonalSolver};
use gf4codes::prelude::*;

fn code(text: &str) -> Code {
    text.parse().unwrap()
}

#[test]
fn test_text_round_trip() {
    for text in ["1|1", "11|1u", "1uv|0|v1||u|1|0v1", "u(1)|1"] {
        let c = code(text);
        let rendered = c.to_string();
        assert_eq!(rendered, text);

        let reparsed: Vec<Series> = rendered
            .split("||")
            .flat_map(|row| row.split('|'))
            .map(|g| g.parse().unwrap())
            .collect();
        assert_eq!(reparsed, c.generators());
    }
}

#[test]
fn test_free_distance_boundaries() {
    assert_eq!(code("1|1").min_distance(), Ok(2));
    assert_eq!(code("1").min_distance(), Ok(1));
}

#[test]
fn test_invalid_code_never_reports_distance() {
    let mut c = Code::new(2, 1);
    c.add(Series::one());
    assert!(!c.validate());
    assert!(c.min_distance().is_err());

    c.add(Series::from_symbols("u1", 1).unwrap());
    assert!(!c.validate());
    assert!(c.min_distance().is_err());
}

#[test]
fn test_zero_code_is_orthogonal_to_everything() {
    let zero = code("0|0|0");
    assert!(zero.is_self_orthogonal().unwrap());
    for other in ["1|1|1", "1u|v|11", "1|0|0||0|1|0"] {
        assert!(zero.is_orthogonal(&code(other)).unwrap());
        assert!(code(other).is_orthogonal(&zero).unwrap());
    }
}

#[test]
fn test_search_returns_self_orthogonal_codes() {
    let mut search = SelfOrthogonalSearch::new(3, 1, 1).unwrap();
    assert_eq!((search.n(), search.k(), search.degree()), (3, 1, 1));

    let codes = search.find().unwrap();
    assert!(!codes.is_empty());
    for c in &codes {
        assert_eq!((c.n(), c.k()), (3, 1));
        assert!(c.is_self_orthogonal().unwrap(), "{c}");
    }
}

#[test]
fn test_search_rejects_higher_rates() {
    assert!(matches!(
        SelfOrthogonalSearch::new(3, 1, 2),
        Err(Error::UnsupportedRate { k: 2, .. })
    ));
}

#[test]
fn test_solver_complements_self_orthogonal_codes() {
    let mut search = SelfOrthogonalSearch::new(3, 1, 1).unwrap();
    for c in search.find().unwrap() {
        let dual = OrthogonalSolver::new(&c).unwrap().solve().unwrap();
        assert_eq!((dual.n(), dual.k()), (3, 2));
        assert!(c.is_orthogonal(&dual).unwrap(), "{c} vs {dual}");
    }

    for text in ["1|1", "11|11", "11|1u|1v"] {
        let c = code(text);
        assert!(c.is_self_orthogonal().unwrap());
        assert!(c.is_orthogonal(&c.find_orthogonal().unwrap()).unwrap());
    }
}

#[test]
fn test_strategies_are_interchangeable() {
    let c = code("11|1u");
    let strategies: [&dyn Complement; 2] = [&LinearSolve, &BruteForce];
    for strategy in strategies {
        let dual = strategy.complement(&c).unwrap();
        assert!(c.is_orthogonal(&dual).unwrap(), "{}", strategy.name());
    }
}

#[test]
fn test_brute_force_is_first_in_enumeration_order() {
    let c = code("11|1u");
    let first = CodeGenerator::new(2, 1, 1)
        .find(|candidate| c.is_orthogonal(candidate).unwrap())
        .unwrap();
    assert_eq!(c.find_orthogonal_brute_force().unwrap(), first);
}

#[test]
fn test_builder_verifies() {
    let c = code("1u|0|11||0|1v|u");
    let dual = ComplementBuilder::new()
        .strategy(Strategy::LinearSolve)
        .verify(true)
        .build(&c)
        .unwrap();
    assert!(c.is_orthogonal(&dual).unwrap());
    assert!(dual.min_distance().unwrap() >= 1);
}

#[test]
fn test_failed_mutation_leaves_code_untouched() {
    let mut c = code("1|u");
    assert!(c.set(2, Series::one()).is_err());
    assert!(c.remove(5).is_err());
    assert_eq!(c.to_string(), "1|u");

    let mut s: Series = "1u".parse().unwrap();
    assert!(s.set(3, Gf4::V).is_err());
    assert_eq!(s.to_string(), "1u");
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_preserves_code() {
    let c = code("1uv|0|v1||u|1|0v1");
    let json = serde_json::to_string(&c).unwrap();
    let back: Code = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
