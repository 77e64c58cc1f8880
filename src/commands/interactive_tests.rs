use std::fs;
use std::io::Cursor;

use tempfile::TempDir;

use super::*;

const HELLO: &str = "\
public class Hello {
    public static void main(String[] args) {
        System.out.println(\"Hello\");
    }
}
";

fn session_output(input: &str) -> String {
    let mut output = Vec::new();
    InteractiveSession::new(Cursor::new(input.to_string()), &mut output, Config::default())
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Hello.java"), HELLO).unwrap();
    temp_dir
}

#[test]
fn end_of_input_stops_immediately() {
    assert_eq!(session_output(""), DIRECTORY_PROMPT);
}

#[test]
fn empty_lines_re_prompt() {
    let output = session_output("\n   \n");
    assert_eq!(output, DIRECTORY_PROMPT.repeat(3));
}

#[test]
fn missing_directory_prints_error_and_asks_to_continue() {
    let output = session_output("/no/such/project\nn\n");

    assert_eq!(
        output,
        format!(
            "{DIRECTORY_PROMPT}The directory does not exist: /no/such/project\n{CONTINUE_PROMPT}"
        )
    );
}

#[test]
fn report_is_printed_for_existing_directory() {
    let dir = project();
    let input = format!("{}\nno\n", dir.path().display());

    let output = session_output(&input);

    assert!(output.starts_with(DIRECTORY_PROMPT));
    assert!(output.contains("| Program "));
    assert!(output.contains("| Hello "));
    assert!(output.ends_with(CONTINUE_PROMPT));
}

#[test]
fn answering_y_starts_another_round() {
    let dir = project();
    let input = format!("{0}\n Y \n{0}\nx\n", dir.path().display());

    let output = session_output(&input);

    assert_eq!(output.matches(DIRECTORY_PROMPT).count(), 2);
    assert_eq!(output.matches(CONTINUE_PROMPT).count(), 2);
}

#[test]
fn end_of_input_at_continue_prompt_stops() {
    let output = session_output("/no/such/project\n");
    assert!(output.ends_with(CONTINUE_PROMPT));
}

#[test]
fn legacy_format_is_used_when_configured() {
    let dir = project();
    let input = format!("{}\n", dir.path().display());
    let mut output = Vec::new();

    InteractiveSession::new(Cursor::new(input), &mut output, Config::default())
        .with_format(OutputFormat::Legacy, ColorMode::Never)
        .run()
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("| Physical LOC | Logical LOC |"));
}
