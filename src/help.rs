pub const HELP_CONTENT: &str = "Available commands:
  sort by [score|rank|country] [asc|desc]  - Sort data by field and order
  search country [country_name]            - Search for a country by name
  show fields [country] [score] [rank]     - Choose which fields to display
  show top [number]                        - Show top N records (default 10)
  help                                     - Show this help message
  exit                                     - Exit the program
";

pub const SORT_USAGE: &str = "Usage: sort by [score|rank|country] [asc|desc]";
pub const SEARCH_USAGE: &str = "Usage: search country [country_name]";
pub const SHOW_FIELDS_USAGE: &str = "Usage: show fields [country] [score] [rank]";

pub const SHOW_USAGE: &str = "Incomplete command. Usage examples:
  show fields country score
  show top 10";
