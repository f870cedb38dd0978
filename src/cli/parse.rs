use super::CliFlags;

#[derive(Debug)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
    MissingValue(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for: {}", s),
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--save" => flags.save = true,
            "--stdin" => flags.stdin_password = true,
            "-s" | "--seed" => flags.seed = Some(take_value(args, &mut i)?),
            "-l" | "--length" => flags.length = Some(take_number(args, &mut i)?),
            "--rev" => flags.revision = Some(take_number(args, &mut i)?),
            "--retries" => flags.retries = Some(take_number(args, &mut i)?),
            "--alphabet" => flags.alphabet = Some(take_value(args, &mut i)?),
            "--capital" | "--minuscule" | "--numeric" | "--special" => {
                let value = take_value(args, &mut i)?;
                let name = args[i - 1].trim_start_matches("--").to_string();
                flags
                    .class_by_name(&name)
                    .expect("class flags are exhaustive")
                    .alphabet = Some(value);
            }
            arg if arg.starts_with("--no-") => {
                let Some(class) = flags.class_by_name(&arg[5..]) else {
                    return Err(ParseError::UnknownArg(arg.to_string()));
                };
                class.disabled = true;
            }
            arg if arg.starts_with("--min-") => {
                let name = arg[6..].to_string();
                let value = take_number(args, &mut i)?;
                let Some(class) = flags.class_by_name(&name) else {
                    return Err(ParseError::UnknownArg(format!("--min-{}", name)));
                };
                class.min = Some(value);
            }
            arg if arg.starts_with("--max-") => {
                let name = arg[6..].to_string();
                let value = take_number(args, &mut i)?;
                let Some(class) = flags.class_by_name(&name) else {
                    return Err(ParseError::UnknownArg(format!("--max-{}", name)));
                };
                class.max = Some(value);
            }
            arg if !arg.starts_with('-') && flags.uri.is_none() => {
                flags.uri = Some(arg.to_string());
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn take_value(args: &[String], i: &mut usize) -> Result<String, ParseError> {
    *i += 1;
    if *i < args.len() {
        Ok(args[*i].clone())
    } else {
        Err(ParseError::MissingValue(args[*i - 1].clone()))
    }
}

fn take_number<N: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<N, ParseError> {
    let value = take_value(args, i)?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("rndphrase")
            .chain(line.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn positional_uri_and_options() {
        let flags = parse(&args("example.com -s k3y -l 20 --rev 2")).unwrap();
        assert_eq!(flags.uri.as_deref(), Some("example.com"));
        assert_eq!(flags.seed.as_deref(), Some("k3y"));
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.revision, Some(2));
    }

    #[test]
    fn class_flags_route_to_their_class() {
        let flags =
            parse(&args("site --no-special --min-capital 2 --max-numeric 4 --numeric 0123")).unwrap();
        assert!(flags.special.disabled);
        assert_eq!(flags.capital.min, Some(2));
        assert_eq!(flags.numeric.max, Some(4));
        assert_eq!(flags.numeric.alphabet.as_deref(), Some("0123"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(matches!(
            parse(&args("--bogus")),
            Err(ParseError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(&args("--no-vowel")),
            Err(ParseError::UnknownArg(_))
        ));
    }

    #[test]
    fn missing_and_malformed_values_are_rejected() {
        assert!(matches!(
            parse(&args("site -l")),
            Err(ParseError::MissingValue(_))
        ));
        assert!(matches!(
            parse(&args("site -l twenty")),
            Err(ParseError::InvalidNumber(_))
        ));
    }
}
