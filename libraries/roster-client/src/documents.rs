//! GraphQL documents issued by the client.
//!
//! Every document selects the full user record so responses can be applied
//! to the cache without a refetch.

/// A named GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub document: &'static str,
}

pub const GET_USERS: Operation = Operation {
    name: "GetUsers",
    document: "query GetUsers {
  getUsers {
    id
    name
    email
    role
    status
    birthdate
  }
}",
};

pub const GET_USER_BY_ID: Operation = Operation {
    name: "GetUserById",
    document: "query GetUserById($id: ID!) {
  getUserById(id: $id) {
    id
    name
    email
    role
    status
    birthdate
  }
}",
};

pub const CREATE_USER: Operation = Operation {
    name: "CreateUser",
    document: "mutation CreateUser(
  $name: String!
  $email: String!
  $role: Role!
  $status: UserStatus!
  $birthdate: Date!
) {
  createUser(name: $name, email: $email, role: $role, status: $status, birthdate: $birthdate) {
    id
    name
    email
    role
    status
    birthdate
  }
}",
};

pub const UPDATE_USER: Operation = Operation {
    name: "UpdateUser",
    document: "mutation UpdateUser(
  $id: ID!
  $name: String!
  $email: String!
  $role: Role!
  $status: UserStatus!
  $birthdate: Date!
) {
  updateUser(id: $id, name: $name, email: $email, role: $role, status: $status, birthdate: $birthdate) {
    id
    name
    email
    role
    status
    birthdate
  }
}",
};

pub const DELETE_USER: Operation = Operation {
    name: "DeleteUser",
    document: "mutation DeleteUser($id: ID!) {
  deleteUser(id: $id) {
    id
    name
    email
    role
    status
    birthdate
  }
}",
};
