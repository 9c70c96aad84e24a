pub struct CommandDef {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
}

pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "year",
        aliases: &["y"],
        description: "Show another year (e.g. :year 2025)",
    },
    CommandDef {
        name: "province",
        aliases: &["prov"],
        description: "Filter by province code or All (e.g. :prov ON)",
    },
    CommandDef {
        name: "page",
        aliases: &["pg"],
        description: "Jump to a page",
    },
    CommandDef {
        name: "search",
        aliases: &["s"],
        description: "Filter by holiday name",
    },
    CommandDef {
        name: "clear",
        aliases: &[],
        description: "Clear the name filter",
    },
    CommandDef {
        name: "open",
        aliases: &["goto"],
        description: "Open a shared link (e.g. :open year=2023&province=ON)",
    },
    CommandDef {
        name: "refresh",
        aliases: &["r"],
        description: "Reload holidays for the current year",
    },
    CommandDef {
        name: "quit",
        aliases: &["q"],
        description: "Quit",
    },
    CommandDef {
        name: "help",
        aliases: &["h"],
        description: "Show help",
    },
];

pub fn matching_commands(input: &str) -> Vec<&'static CommandDef> {
    let input_lower = input.to_lowercase();
    COMMANDS
        .iter()
        .filter(|cmd| {
            cmd.name.starts_with(&input_lower)
                || cmd.aliases.iter().any(|a| a.starts_with(&input_lower))
        })
        .collect()
}
