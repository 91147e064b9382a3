//! Acronym cheat sheets.

use super::TopicContent;

pub const SYSTEM_DESIGN_ACRONYMS: TopicContent = TopicContent::new(
    "system-design-acronyms",
    "System Design Acronyms",
    r#"<table>
  <tr><th>Acronym</th><th>Meaning</th></tr>
  <tr><td>CAP</td><td>Consistency, Availability, Partition tolerance</td></tr>
  <tr><td>CDN</td><td>Content Delivery Network</td></tr>
  <tr><td>CQRS</td><td>Command Query Responsibility Segregation</td></tr>
  <tr><td>QPS</td><td>Queries Per Second</td></tr>
  <tr><td>SLA / SLO / SLI</td><td>Service Level Agreement / Objective / Indicator</td></tr>
  <tr><td>SPOF</td><td>Single Point Of Failure</td></tr>
  <tr><td>TTL</td><td>Time To Live</td></tr>
</table>"#,
);

pub const DATABASE_ACRONYMS: TopicContent = TopicContent::new(
    "database-acronyms",
    "Database Acronyms",
    r#"<table>
  <tr><th>Acronym</th><th>Meaning</th></tr>
  <tr><td>ACID</td><td>Atomicity, Consistency, Isolation, Durability</td></tr>
  <tr><td>BASE</td><td>Basically Available, Soft state, Eventual consistency</td></tr>
  <tr><td>MVCC</td><td>Multi-Version Concurrency Control</td></tr>
  <tr><td>OLTP / OLAP</td><td>Online Transaction / Analytical Processing</td></tr>
  <tr><td>WAL</td><td>Write-Ahead Log</td></tr>
  <tr><td>LSM</td><td>Log-Structured Merge tree</td></tr>
</table>"#,
);

pub const NETWORKING_ACRONYMS: TopicContent = TopicContent::new(
    "networking-acronyms",
    "Networking Acronyms",
    r#"<table>
  <tr><th>Acronym</th><th>Meaning</th></tr>
  <tr><td>DNS</td><td>Domain Name System</td></tr>
  <tr><td>TCP / UDP</td><td>Transmission Control / User Datagram Protocol</td></tr>
  <tr><td>TLS</td><td>Transport Layer Security</td></tr>
  <tr><td>QUIC</td><td>Not an acronym any more; UDP-based transport under HTTP/3</td></tr>
  <tr><td>RTT</td><td>Round-Trip Time</td></tr>
  <tr><td>NAT</td><td>Network Address Translation</td></tr>
</table>"#,
);

pub const ALL: &[TopicContent] = &[
    SYSTEM_DESIGN_ACRONYMS,
    DATABASE_ACRONYMS,
    NETWORKING_ACRONYMS,
];
