use spoly::{QPoly, Rational};
use crate::app::err::*;

pub type P = QPoly<'x'>;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

// input: JSON list of [coeff, deg], coeff being an integer or "n/d".
pub fn load_poly(input: &str) -> Result<P, Box<dyn std::error::Error>> {
    type Pairs = Vec<(Rational, i64)>;

    ensure!(!input.trim().is_empty(), "empty input polynomial");

    let Ok(pairs) = serde_json::from_str::<Pairs>(input) else {
        return err!("invalid input polynomial: '{}'", input);
    };

    let p = P::try_from_pairs(pairs)?;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use spoly::PolyError;
    use super::*;

    #[test]
    fn load() {
        let p = load_poly(r#"[[3, 3], ["-2", 2], [1, 0]]"#).unwrap();
        assert_eq!(p.to_string(), "3x^3 - 2x^2 + 1");

        let p = load_poly(r#"[["1/2", 1], ["2/4", 1]]"#).unwrap();
        assert_eq!(p.to_string(), "x");

        let p = load_poly("[]").unwrap();
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn load_invalid() {
        let e = load_poly("[[1, 2").unwrap_err();
        assert_eq!(e.to_string(), "invalid input polynomial: '[[1, 2'");

        assert!(load_poly(r#"[["1/x", 2]]"#).is_err());

        let e = load_poly(" ").unwrap_err();
        assert_eq!(e.to_string(), "empty input polynomial");
    }

    #[test]
    fn load_negative_deg() {
        let e = load_poly("[[1, -1]]").unwrap_err();
        assert_eq!(e.to_string(), PolyError::NegativeDegree(-1).to_string());
    }

    #[test]
    fn guard() {
        let res: Result<(), _> = guard_panic(|| panic!("boom"));
        assert_eq!(res.unwrap_err().to_string(), "panic: boom");

        let res = guard_panic(|| Ok(1));
        assert_eq!(res.unwrap(), 1);
    }
}
