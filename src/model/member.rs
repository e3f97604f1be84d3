/// The guild member information needed for permission checks and display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub user_id: u64,
    /// Account username, used for ticket channel names.
    pub username: String,
    /// Display tag used in logs and transcripts.
    pub tag: String,
    pub role_ids: Vec<u64>,
    /// Whether the member holds the Administrator permission.
    pub administrator: bool,
}

impl MemberInfo {
    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }

    /// Mention string for the member.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id)
    }
}
