use crate::core::{
    command_init::CommandInit,
    config::YagConfig,
    error::Result,
    status::{snapshot, Classification, StatusRecord},
};

/// One of the `yag test list_<class>_<side>` listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassList {
    ChangedStaged,
    UntrackedStaged,
    ChangedUnstaged,
    UntrackedUnstaged,
}

impl ClassList {
    pub const ALL: [ClassList; 4] = [
        ClassList::ChangedStaged,
        ClassList::UntrackedStaged,
        ClassList::ChangedUnstaged,
        ClassList::UntrackedUnstaged,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ClassList::ChangedStaged => "list_changed_staged",
            ClassList::UntrackedStaged => "list_untracked_staged",
            ClassList::ChangedUnstaged => "list_changed_unstaged",
            ClassList::UntrackedUnstaged => "list_untracked_unstaged",
        }
    }

    pub fn classification(self) -> Classification {
        match self {
            ClassList::ChangedStaged | ClassList::ChangedUnstaged => Classification::Modified,
            ClassList::UntrackedStaged => Classification::UntrackedNew,
            ClassList::UntrackedUnstaged => Classification::Untracked,
        }
    }

    fn staged_side(self) -> bool {
        matches!(self, ClassList::ChangedStaged | ClassList::UntrackedStaged)
    }

    /// Staged listings want something in the index, unstaged ones want nothing there.
    pub fn matches(self, record: &StatusRecord) -> bool {
        record.staged_any() == self.staged_side() && self.classification().holds_for(record)
    }

    /// Matching paths, verbatim and in snapshot order.
    pub fn select(self, records: &[StatusRecord]) -> Vec<&str> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .map(|r| r.path.as_str())
            .collect()
    }
}

/// `yag test list_*`: print the paths one classification selects.
pub fn execute_class_list(config: &YagConfig, list: ClassList) -> Result<()> {
    let context = CommandInit::initialize(config)?;
    let records = snapshot(&context.git)?;
    log::debug!("{} over {} record(s)", list.name(), records.len());

    for path in list.select(&records) {
        println!("{path}");
    }
    Ok(())
}
