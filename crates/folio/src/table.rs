use folio_core::Project;

const HEADERS: [&str; 6] = ["Id", "Title", "Category", "Tags", "Created", "Links"];

pub struct TableFormatter {
    widths: [usize; 6],
}

impl TableFormatter {
    pub fn new(projects: &[&Project]) -> Self {
        let title_width = projects
            .iter()
            .map(|p| p.title().chars().count())
            .max()
            .unwrap_or(16)
            .clamp(5, 40);
        // Ids are never truncated, they are what rm/edit/show take
        let id_width = projects
            .iter()
            .map(|p| p.id().chars().count())
            .max()
            .unwrap_or(2)
            .max(2);

        Self {
            // id, title, category, tags, created, links
            widths: [id_width, title_width, 8, 28, 10, 9],
        }
    }

    pub fn print_table(&self, projects: &[&Project]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.row(&HEADERS.map(String::from)));
        println!("{}", self.border('├', '┼', '┤'));
        for project in projects {
            println!("{}", self.row(&project_cells(project)));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!(
            "{}{}{}",
            left,
            segments.join(&middle.to_string()),
            right
        )
    }

    fn row(&self, cells: &[String; 6]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(self.widths)
            .map(|(cell, width)| truncate(cell, width))
            .collect();
        format!("│ {} │", padded.join(" │ "))
    }
}

fn project_cells(project: &Project) -> [String; 6] {
    [
        project.id().to_string(),
        project.title().to_string(),
        project.category().to_string(),
        project.tags().join(", "),
        project.created_at().format("%Y-%m-%d").to_string(),
        links_label(project),
    ]
}

fn links_label(project: &Project) -> String {
    match (project.demo_link(), project.code_link()) {
        (Some(_), Some(_)) => "demo+code".to_string(),
        (Some(_), None) => "demo".to_string(),
        (None, Some(_)) => "code".to_string(),
        (None, None) => "-".to_string(),
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Counts characters rather than bytes so multi-byte titles are never split.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
