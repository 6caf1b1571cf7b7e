//! Command listing printed for `HELP`.

/// Every supported command with its arguments and transaction semantics.
pub const HELP_TEXT: &str = "\
Supported commands:
  SET <name> <value>   Set the variable <name> to <value>. Names and values are
                       case-sensitive strings without spaces.
  GET <name>           Print the value of <name>, or NULL if it is not set.
  UNSET <name>         Unset <name>, as if it had never been set.
  NUMEQUALTO <value>   Print the number of variables currently set to <value>.
  END                  Exit.

Supported transactions:
  BEGIN                Open a new transaction block. Blocks can be nested.
  ROLLBACK             Undo every command issued in the most recent block and
                       close it. Prints NO TRANSACTION if no block is open.
  COMMIT               Close all open blocks, permanently applying their changes.
                       Prints NO TRANSACTION if no block is open.

Keywords are case-insensitive. HELP prints this listing.";
