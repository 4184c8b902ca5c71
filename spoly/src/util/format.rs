use std::fmt::Display;

pub fn paren_expr<S>(s: S) -> String
where S: Display {
    let s = s.to_string();
    if s.contains(' ') { 
        format!("({s})")
    } else { 
        s
    }
}

// Renders a linear combination `Σ r x` from (x, r) pairs in the given order,
// e.g. [("x²", 3), ("x", -1), ("1", 2)] -> "3x² - x + 2".
pub fn lc<X, R, S>(mut terms: S) -> String
where 
    X: Display, 
    R: Display, 
    S: Iterator<Item = (X, R)>
{ 
    let mut res: Vec<String> = vec![];
    
    if let Some((x, r)) = terms.next() {
        let r = paren_expr(r);
        let x = x.to_string();

        let term = if r == "1" { 
            x
        } else if r == "-1" { 
            format!("-{x}")
        } else if x == "1" {
            r
        } else { 
            format!("{r}{x}")
        };

        res.push(term)
    } else { 
        return String::from("0")
    }

    for (x, r) in terms {
        let r = paren_expr(r);
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') { 
            ("-", r.to_owned()) 
        } else { 
            ("+", r.clone())
        };

        let term = if r == "1" { 
            x
        } else if x == "1" { 
            r
        } else { 
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    res.join(" ")
}

// x^d as "1", "x", "x^d" or "xᵈ".
pub fn mono(x: char, d: usize, unicode: bool) -> String { 
    if d == 0 { 
        "1".to_string()
    } else if d == 1 { 
        x.to_string()
    } else if unicode {
        let e = superscript(d); 
        format!("{x}{e}")
    } else { 
        format!("{x}^{d}")
    }
}

pub fn superscript(i: usize) -> String { 
    i.to_string().chars().map(|c| match c { 
        '1' => '\u{00B9}',
        '2' => '\u{00B2}',
        '3' => '\u{00B3}',
        _ => { 
            let d = c as u32 - '0' as u32;
            char::from_u32('\u{2070}' as u32 + d).unwrap_or(c)
        }
    }).collect()
}
