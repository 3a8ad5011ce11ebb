/// Records every fresh store starts with
use roster_core::{Birthdate, Role, User, UserId, UserStatus};

/// The five seed users, in list order
pub fn seed_users() -> Vec<User> {
    [
        ("1", "Alice Johnson", "alice.johnson@example.com", Role::Admin, UserStatus::Active, (1990, 5, 14)),
        ("2", "Bob Smith", "bob.smith@example.com", Role::User, UserStatus::Pending, (1985, 11, 23)),
        ("3", "Carol Martinez", "carol.martinez@example.com", Role::Moderator, UserStatus::Active, (1992, 7, 9)),
        ("4", "David Lee", "david.lee@example.com", Role::User, UserStatus::Active, (1988, 3, 30)),
        ("5", "Evelyn Wright", "evelyn.wright@example.com", Role::Admin, UserStatus::Banned, (1995, 12, 18)),
    ]
    .into_iter()
    .filter_map(|(id, name, email, role, status, (year, month, day))| {
        Some(User {
            id: UserId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            birthdate: Birthdate::from_ymd(year, month, day)?,
        })
    })
    .collect()
}
