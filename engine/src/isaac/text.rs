//! Textual state format
//!
//! `cursor result[0..N] pool[0..N] a b c`, decimal, single-space separated.
//! Reading is all-or-nothing: fields are parsed into a staging engine and
//! only committed once every field has parsed.

use super::Isaac;
use crate::error::IsaacError;
use crate::word::IsaacWord;
use std::fmt;
use std::io;
use std::str::FromStr;

impl<W: IsaacWord, const ALPHA: usize> Isaac<W, ALPHA> {
    /// Read one serialized engine from a whitespace-token stream
    ///
    /// Consumes exactly the tokens of one engine, so several engines written
    /// back to back can be read in turn. On failure `self` is unchanged.
    pub fn read_state<'a, I>(&mut self, tokens: &mut I) -> Result<(), IsaacError>
    where
        I: Iterator<Item = &'a str>,
    {
        let staged = Self::parse_state(tokens).map_err(|err| {
            log::warn!("{} state restore rejected: {}", W::NAME, err);
            err
        })?;
        *self = staged;
        log::debug!("{} state restored (cursor {})", W::NAME, self.cursor);
        Ok(())
    }

    /// Restore from the complete serialized text; trailing tokens are an error
    pub fn restore(&mut self, text: &str) -> Result<(), IsaacError> {
        let staged = text.parse::<Self>().map_err(|err| {
            log::warn!("{} state restore rejected: {}", W::NAME, err);
            err
        })?;
        *self = staged;
        Ok(())
    }

    /// Write the textual state to `out`
    pub fn save_state<Out: io::Write>(&self, out: &mut Out) -> Result<(), IsaacError> {
        write!(out, "{}", self)?;
        Ok(())
    }

    /// Read the whole of `reader` and restore from it
    ///
    /// Reader failures surface as [`IsaacError::Io`]; bytes that are not
    /// UTF-8 are malformed state like any other unparsable field.
    pub fn load_state<R: io::Read>(&mut self, mut reader: R) -> Result<(), IsaacError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = std::str::from_utf8(&bytes).map_err(|e| {
            log::warn!("{} state restore rejected: stream is not UTF-8", W::NAME);
            IsaacError::malformed("stream", e.to_string())
        })?;
        self.restore(text)
    }

    fn parse_state<'a, I>(tokens: &mut I) -> Result<Self, IsaacError>
    where
        I: Iterator<Item = &'a str>,
    {
        let cursor: usize = next_field(tokens, || "cursor".to_string())?;
        if cursor > Self::STATE_SIZE {
            return Err(IsaacError::malformed(
                "cursor",
                format!("{} exceeds state size {}", cursor, Self::STATE_SIZE),
            ));
        }

        let mut staged = Self::blank();
        for i in 0..Self::STATE_SIZE {
            staged.result[i] = next_field(tokens, || format!("result[{}]", i))?;
        }
        for i in 0..Self::STATE_SIZE {
            staged.pool[i] = next_field(tokens, || format!("pool[{}]", i))?;
        }
        staged.a = next_field(tokens, || "a".to_string())?;
        staged.b = next_field(tokens, || "b".to_string())?;
        staged.c = next_field(tokens, || "c".to_string())?;
        staged.cursor = cursor;

        Ok(staged)
    }
}

fn next_field<'a, T, I, F>(tokens: &mut I, field: F) -> Result<T, IsaacError>
where
    T: FromStr,
    T::Err: fmt::Display,
    I: Iterator<Item = &'a str>,
    F: Fn() -> String,
{
    let token = tokens
        .next()
        .ok_or_else(|| IsaacError::malformed(field(), "missing value"))?;
    token
        .parse()
        .map_err(|e: T::Err| IsaacError::malformed(field(), format!("{:?}: {}", token, e)))
}

impl<W: IsaacWord, const ALPHA: usize> fmt::Display for Isaac<W, ALPHA> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cursor)?;
        for word in self.result.iter().chain(self.pool.iter()) {
            write!(f, " {}", word)?;
        }
        write!(f, " {} {} {}", self.a, self.b, self.c)
    }
}

impl<W: IsaacWord, const ALPHA: usize> FromStr for Isaac<W, ALPHA> {
    type Err = IsaacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let engine = Self::parse_state(&mut tokens)?;
        if let Some(extra) = tokens.next() {
            return Err(IsaacError::malformed(
                "end of state",
                format!("unexpected trailing token {:?}", extra),
            ));
        }
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small32 = Isaac<u32, 3>;

    #[test]
    fn test_field_order_and_count() {
        let rng = Small32::new(11);
        let text = rng.to_string();
        let tokens: Vec<&str> = text.split(' ').collect();

        assert_eq!(tokens.len(), 1 + 8 + 8 + 3);
        assert_eq!(tokens[0], "8");
        assert_eq!(tokens[1], rng.results()[0].to_string());
        assert_eq!(tokens[9], rng.pool()[0].to_string());
        assert_eq!(tokens[19], "1", "c is last and counts the init refill");
    }

    #[test]
    fn test_error_names_failing_field() {
        let rng = Small32::new(11);
        let mut tokens: Vec<String> = rng.to_string().split(' ').map(String::from).collect();
        tokens[11] = "oops".to_string();

        let err = tokens.join(" ").parse::<Small32>().unwrap_err();
        match err {
            IsaacError::MalformedSerializedState { field, .. } => assert_eq!(field, "pool[2]"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_truncated_reports_missing_value() {
        let err = "8 1 2 3".parse::<Small32>().unwrap_err();
        assert_eq!(
            err,
            IsaacError::malformed("result[3]", "missing value"),
        );
    }

    #[test]
    fn test_cursor_beyond_state_rejected() {
        let rng = Small32::new(0);
        let text = rng.to_string();
        let bad = format!("9{}", &text[1..]);
        let err = bad.parse::<Small32>().unwrap_err();
        assert!(matches!(
            err,
            IsaacError::MalformedSerializedState { ref field, .. } if field == "cursor"
        ));
    }

    #[test]
    fn test_trailing_tokens_rejected_by_from_str() {
        let rng = Small32::new(0);
        let text = format!("{} 42", rng);
        assert!(text.parse::<Small32>().is_err());
    }

    #[test]
    fn test_read_state_consumes_one_engine() {
        let first = Small32::new(1);
        let second = Small32::new(2);
        let text = format!("{} {}", first, second);
        let mut tokens = text.split_whitespace();

        let mut target = Small32::new(0);
        target.read_state(&mut tokens).unwrap();
        assert_eq!(target, first);
        target.read_state(&mut tokens).unwrap();
        assert_eq!(target, second);
        assert!(tokens.next().is_none());
    }

    #[test]
    fn test_load_state_reader_failure_is_io() {
        struct Broken;
        impl io::Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
            }
        }

        let mut rng = Small32::new(4);
        let err = rng.load_state(Broken).unwrap_err();
        assert!(matches!(err, IsaacError::Io(_)));
        assert_eq!(rng, Small32::new(4));
    }

    #[test]
    fn test_save_and_load_through_io() {
        let mut rng = Small32::new(4);
        rng.discard(3);

        let mut buf: Vec<u8> = Vec::new();
        rng.save_state(&mut buf).unwrap();

        let mut restored = Small32::new(0);
        restored.load_state(buf.as_slice()).unwrap();
        assert_eq!(restored, rng);
    }
}
