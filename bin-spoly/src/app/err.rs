#[derive(Debug, derive_more::Display)]
pub struct Error {
    pub msg: String
}

impl std::error::Error for Error {}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::*;
        let e = Error{ msg: format!($($arg)*) };
        Err( e.into() )
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond {
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};

#[cfg(test)]
mod tests {
    use super::*;

    fn check_degree(d: i64) -> Result<usize, Box<dyn std::error::Error>> {
        ensure!(d >= 0, "degree must be non-negative, got {d}");
        Ok(d as usize)
    }

    #[test]
    fn err_macro() {
        let res: Result<(), Box<dyn std::error::Error>> = err!("bad input: {}", 42);
        assert_eq!(res.unwrap_err().to_string(), "bad input: 42");
    }

    #[test]
    fn ensure_macro() {
        assert_eq!(check_degree(3).unwrap(), 3);
        assert_eq!(check_degree(-1).unwrap_err().to_string(), "degree must be non-negative, got -1");
    }
}
