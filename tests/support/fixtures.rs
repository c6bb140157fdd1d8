//! Test fixtures and constants.

/// File name of the standard definition file.
pub const DEFINITION_FILE: &str = "servers.yaml";

/// File name of the standard vault file.
pub const VAULT_FILE: &str = "vault.yml";

/// Password of encrypted fixture vaults.
pub const PASSWORD: &str = "correct horse battery staple";

/// Two servers, one group holding both, which is also the default.
pub const DEFINITION: &str = "\
servers:
  myserver1:
    description: first test server
    contact_name: Jane Doe
    access_via: ssh
  myserver2:
    description: second test server
server_groups:
  mygroup1:
    description: both test servers
    members: [myserver1, myserver2]
default: mygroup1
vault_file: vault.yml
";

/// Secrets for both servers in [`DEFINITION`].
pub const VAULT: &str = "\
secrets:
  myserver1:
    host: 10.11.12.13
    username: myuser1
    password: mypass1
  myserver2:
    host: 10.11.12.14
    username: myuser2
    password: mypass2
";

/// Groups sharing servers, for ordering and deduplication.
pub const OVERLAPPING: &str = "\
servers:
  s1: {description: one}
  s2: {description: two}
  s3: {description: three}
  s4: {description: four}
server_groups:
  g1: {description: g1, members: [s1, s2]}
  g2: {description: g2, members: [s2, s3]}
  g3: {description: g3, members: [g1, g2]}
  g4: {description: g4, members: [s4, g3, s1, g1]}
";
