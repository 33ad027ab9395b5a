//! Help system for splitpair commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => {
            if let Some(text) = command_help(t) {
                return text;
            }
            format!("Unknown help topic: '{}'. Run 'pair help' for a list of commands.", t)
        }
    }
}


fn overview() -> String {
    "\
pair — show stylesheets and their components side by side

Usage: pair [--config <file>] <command> [args...]

Matcher commands:
  classify <path>            Print style, markup, or none
  resolve <path>             Print the paired file
  candidates <path>          Print every candidate in search order

Layout commands:
  open <path> [--pane <p>] [--beside <path>]
                             Run the manual command and print the actions
  focus <path> [--pane <p>] [--beside <path>]
                             Run the automatic path and print the actions

Other:
  settings                   Print the effective settings as JSON
  help [topic]               Show help

Run 'pair help <command>' for detailed help on a specific command."
        .into()
}


fn command_help(cmd: &str) -> Option<String> {
    let text = match cmd {
        "classify" => "\
classify <path>
  Match the file name against styleExtensions and markupExtensions.
  The longest matching suffix decides; ties go to style.",

        "resolve" => "\
resolve <path>
  Find the paired file in the same directory. Tries the stem with each
  extension of the other group first, then the .module and .styles naming
  variants. Fails when nothing exists on disk.",

        "candidates" => "\
candidates <path>
  List every path resolve would check, in order, without touching disk.",

        "open" => "\
open <path> [--pane <primary|secondary>] [--beside <path>]
  Focus <path> in --pane (default primary), show --beside in the other
  pane, then run the manual open-paired command. Always places, even
  when the paired file is already visible.",

        "focus" => "\
focus <path> [--pane <primary|secondary>] [--beside <path>]
  Like open, but runs the automatic focus-change path: does nothing when
  disabled or when the paired file is already visible.",

        "settings" => "\
settings
  Print the settings in effect. Read from --config, else
  $PAIR_CONFIG_DIR/settings.json, else the user config directory.
  A --config file must exist; a missing default file means defaults.",

        _ => return None,
    };
    Some(text.into())
}
