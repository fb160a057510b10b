use crate::netsh::Runner;

/// `netsh interface show interface` prints a column header, a separator row,
/// and a blank line before the first data row.
const HEADER_LINES: usize = 3;

/// Extracts interface display names from the tabular `show interface` output.
///
/// Each data row is `Admin State  State  Type  Interface Name`; the name is
/// everything from the fourth whitespace-delimited field onward, since
/// display names may themselves contain spaces.
pub fn parse_interface_table(output: &str) -> Vec<String> {
    output
        .lines()
        .skip(HEADER_LINES)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() >= 4 {
                Some(fields[3..].join(" "))
            } else {
                None
            }
        })
        .collect()
}

/// Lists configurable network interfaces in the order the OS reports them.
///
/// Any invocation or parse failure yields an empty list; callers treat "no
/// interfaces" as a legitimate state, not an error.
pub async fn list_interfaces<R: Runner>(runner: &R) -> Vec<String> {
    match runner.run(&["interface", "show", "interface"]).await {
        Ok(output) => parse_interface_table(&output),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netsh::mock::MockRunner;

    const SAMPLE_OUTPUT: &str = "\
Admin State    State          Type             Interface Name
-------------------------------------------------------------------------
\n\
Enabled  Connected  Dedicated  Ethernet
Enabled  Connected  Dedicated  Wi-Fi
";

    #[test]
    fn test_parse_interface_table() {
        let output = "header one\nheader two\nheader three\n\
                      Enabled  Connected  Dedicated  Ethernet\n\
                      Enabled  Connected  Dedicated  Wi-Fi\n";
        assert_eq!(parse_interface_table(output), vec!["Ethernet", "Wi-Fi"]);
    }

    #[test]
    fn test_parse_preserves_spaces_in_names() {
        let output = "h1\nh2\nh3\n\
                      Enabled  Connected  Dedicated  Ethernet 2\n\
                      Enabled  Disconnected  Dedicated  Local Area Connection\n";
        assert_eq!(
            parse_interface_table(output),
            vec!["Ethernet 2", "Local Area Connection"]
        );
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let output = "h1\nh2\nh3\nEnabled  Connected\n\n";
        assert_eq!(parse_interface_table(output), Vec::<String>::new());
    }

    #[test]
    fn test_parse_empty_output() {
        assert_eq!(parse_interface_table(""), Vec::<String>::new());
    }

    #[tokio::test]
    async fn test_list_interfaces() {
        let runner = MockRunner::succeeding(SAMPLE_OUTPUT);
        let interfaces = list_interfaces(&runner).await;
        assert_eq!(interfaces, vec!["Ethernet", "Wi-Fi"]);
        assert_eq!(
            runner.calls(),
            vec![vec!["interface", "show", "interface"]]
        );
    }

    #[tokio::test]
    async fn test_list_interfaces_failure_yields_empty() {
        let runner = MockRunner::failing("The requested operation requires elevation.");
        assert_eq!(list_interfaces(&runner).await, Vec::<String>::new());
    }
}
