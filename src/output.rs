use std::io::Write;
use std::path::Path;
use std::sync::OnceLock;

static QUIET: OnceLock<bool> = OnceLock::new();

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(|| {
        std::env::var("UMLSKETCH_QUIET")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    })
}

/// Write rendered text followed by a newline to `out`
pub fn write_rendered(out: &mut impl Write, rendered: &str) -> std::io::Result<()> {
    writeln!(out, "{}", rendered)?;
    out.flush()
}

/// Write rendered text to `path`, or to stdout when no path is given
pub fn emit(rendered: &str, path: Option<&Path>) -> std::io::Result<()> {
    match path {
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            write_rendered(&mut file, rendered)
        }
        None => write_rendered(&mut std::io::stdout().lock(), rendered),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_rendered_appends_newline() {
        let mut buffer = Vec::new();
        write_rendered(&mut buffer, "@startuml\n@enduml").unwrap();
        assert_eq!(buffer, b"@startuml\n@enduml\n");
    }

    #[test]
    fn test_emit_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.puml");
        emit("@startuml\n@enduml", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "@startuml\n@enduml\n");
    }
}
