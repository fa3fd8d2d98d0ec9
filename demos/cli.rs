use routematch::{Matcher, Segment};

pub fn main() -> Result<(), String> {
    let mut args = std::env::args().skip(1);
    let (Some(pattern), url) = (args.next(), args.next().unwrap_or_default()) else {
        return Err(String::from("usage: cli <pattern> [url]"));
    };

    let pattern = Matcher::new()
        .compile(&pattern)
        .map_err(|e| e.to_string())?;

    println!("pattern: {pattern}");
    for segment in pattern.segments() {
        let description = match segment {
            Segment::Exact(text) => format!("exact {text:?}"),
            Segment::Wildcard => String::from("any one segment"),
            Segment::MultiWildcard => String::from("any number of segments"),
            Segment::Param { name, kind: None } => format!("param {name}"),
            Segment::Param {
                name,
                kind: Some(kind),
            } => format!("param {name} ({kind})"),
        };
        println!("  {segment}: {description}");
    }

    let result = pattern.matches(&url).map_err(|e| e.to_string())?;

    println!("\ninput: {url}\nmatched: {}", result.is_match());
    for binding in result.bindings().iter() {
        println!("  {} = {}", binding.name(), binding.value());
    }

    Ok(())
}
