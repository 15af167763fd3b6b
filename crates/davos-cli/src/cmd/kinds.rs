//! Kinds command

use davos_core::ErrorKind;

/// Render the error taxonomy as an indented tree, root first.
pub fn tree() -> String {
    ErrorKind::ALL
        .iter()
        .map(|kind| {
            let depth = kind.ancestors().count() - 1;
            format!("{}{kind}", "  ".repeat(depth))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the error taxonomy
pub fn kinds() {
    println!("{}", tree());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_is_indented_by_depth() {
        let tree = tree();
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "DavosError");
        assert_eq!(lines[3], "      OnionArgumentError");
        assert_eq!(lines[6], "    InstallerError");
    }
}
