/*
 * Responsibility
 * - Mock user records served by GET /api/users
 * - The list is a compile-time constant; every request sees the same three users
 */
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

pub static MOCK_USERS: [User; 3] = [
    User {
        id: 1,
        name: "John Doe",
        email: "john@example.com",
        role: "Admin",
    },
    User {
        id: 2,
        name: "Jane Smith",
        email: "jane@example.com",
        role: "Developer",
    },
    User {
        id: 3,
        name: "Bob Johnson",
        email: "bob@example.com",
        role: "DevOps",
    },
];

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: &'static [User],
    pub count: usize,
    pub environment: String,
    pub version: String,
}
