//! Command words and usage text.

pub const ADD_WORD: &str = "add";
pub const EDIT_WORD: &str = "edit";
pub const DELETE_WORD: &str = "delete";
pub const FIND_WORD: &str = "find";
pub const LIST_WORD: &str = "list";
pub const CLEAR_WORD: &str = "clear";
pub const EXIT_WORD: &str = "exit";
pub const HELP_WORD: &str = "help";

pub const ADD_USAGE: &str = "add: Adds a contact.\n\
    Parameters: n/NAME p/PHONE e/EMAIL o/NOTE [t/TAG]... [a/ALTERNATE CONTACT]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com o/Met at career fair. \
    t/friends a/Telegram@johndoe";

pub const EDIT_USAGE: &str = "edit: Edits the details of the contact identified by the \
    index number used in the displayed contact list. \
    Existing values will be overwritten by the input values.\n\
    Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [o/NOTE] \
    [t/TAG]... [a/ALTERNATE CONTACT]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

pub const DELETE_USAGE: &str = "delete: Deletes the contact(s) identified by the index \
    numbers used in the displayed contact list.\n\
    Parameters: INDEX... (each must be a positive integer)\n\
    Example: delete 1 3 5";

pub const FIND_USAGE: &str = "find: Finds and lists all contacts whose names match any of \
    the specified words in full. Case insensitive.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find alice bob charlie";

pub const LIST_USAGE: &str = "list: Lists all contacts.\nExample: list";

pub const CLEAR_USAGE: &str = "clear: Removes all contacts.\nExample: clear";

pub const EXIT_USAGE: &str = "exit: Saves and exits the app.\nExample: exit";

pub const HELP_USAGE: &str = "help: Shows usage for every command.\nExample: help";

/// Usage text for every command, separated by blank lines.
pub fn help_text() -> String {
    [
        ADD_USAGE,
        EDIT_USAGE,
        DELETE_USAGE,
        FIND_USAGE,
        LIST_USAGE,
        CLEAR_USAGE,
        EXIT_USAGE,
        HELP_USAGE,
    ]
    .join("\n\n")
}
