//! Networking and protocols.

use super::TopicContent;

pub const TCP_VS_UDP: TopicContent = TopicContent::new(
    "tcp-vs-udp",
    "TCP vs UDP",
    r#"<h3>Comparison</h3>
<table>
  <tr><th></th><th>TCP</th><th>UDP</th></tr>
  <tr><td>Connection</td><td>Three-way handshake</td><td>Connectionless</td></tr>
  <tr><td>Reliability</td><td>Retransmission, ordering, flow and congestion control</td><td>Best effort</td></tr>
  <tr><td>Header</td><td>20+ bytes</td><td>8 bytes</td></tr>
  <tr><td>Typical use</td><td>HTTP/1.1, HTTP/2, databases, SSH</td><td>DNS, VoIP, games, QUIC</td></tr>
</table>
<p>TCP suffers head-of-line blocking: one lost segment stalls every byte behind it. QUIC rebuilds reliability per stream on top of UDP to avoid this.</p>"#,
);

pub const DNS_RESOLUTION: TopicContent = TopicContent::new(
    "dns-resolution",
    "DNS Resolution",
    r#"<h3>Lookup path</h3>
<ol>
  <li>Browser and OS caches.</li>
  <li>Recursive resolver (ISP or public, e.g. 1.1.1.1).</li>
  <li>Root server, which refers to the TLD server.</li>
  <li>TLD server, which refers to the authoritative name server.</li>
  <li>Authoritative server returns the record; each hop caches it for its TTL.</li>
</ol>
<table>
  <tr><th>Record</th><th>Purpose</th></tr>
  <tr><td>A / AAAA</td><td>IPv4 / IPv6 address</td></tr>
  <tr><td>CNAME</td><td>Alias to another name</td></tr>
  <tr><td>MX</td><td>Mail exchanger</td></tr>
  <tr><td>TXT</td><td>Verification, SPF, DKIM</td></tr>
</table>"#,
);

pub const HTTP_VERSIONS: TopicContent = TopicContent::new(
    "http-versions",
    "HTTP/1.1 vs HTTP/2 vs HTTP/3",
    r#"<table>
  <tr><th>Version</th><th>Transport</th><th>Key ideas</th></tr>
  <tr><td>HTTP/1.1</td><td>TCP</td><td>Text protocol, keep-alive, one request in flight per connection</td></tr>
  <tr><td>HTTP/2</td><td>TCP</td><td>Binary framing, multiplexed streams, HPACK header compression</td></tr>
  <tr><td>HTTP/3</td><td>QUIC over UDP</td><td>No TCP head-of-line blocking, 0-RTT, connection migration</td></tr>
</table>
<p>HTTP/2 removed application-level head-of-line blocking but still inherits it from TCP; HTTP/3 removes it at the transport.</p>"#,
);

pub const WEBSOCKETS_VS_LONG_POLLING: TopicContent = TopicContent::new(
    "websockets-vs-long-polling",
    "WebSockets vs Long Polling",
    r#"<h3>Options for server push</h3>
<ul>
  <li><strong>Short polling</strong>: client asks on a timer; simple, wasteful.</li>
  <li><strong>Long polling</strong>: server holds the request until data is ready; works everywhere.</li>
  <li><strong>Server-Sent Events</strong>: one-way stream over HTTP with automatic reconnect.</li>
  <li><strong>WebSockets</strong>: full-duplex frames after an HTTP Upgrade handshake.</li>
</ul>
<p>WebSockets suit chat and collaborative editing; they need sticky routing or a pub/sub backplane when scaled across servers.</p>"#,
);

pub const REST_VS_GRAPHQL_VS_GRPC: TopicContent = TopicContent::new(
    "rest-vs-graphql-vs-grpc",
    "REST vs GraphQL vs gRPC",
    r#"<table>
  <tr><th></th><th>REST</th><th>GraphQL</th><th>gRPC</th></tr>
  <tr><td>Shape</td><td>Resources and verbs</td><td>Client-defined queries</td><td>Typed RPC methods</td></tr>
  <tr><td>Encoding</td><td>JSON</td><td>JSON</td><td>Protocol Buffers</td></tr>
  <tr><td>Transport</td><td>HTTP/1.1 or 2</td><td>HTTP</td><td>HTTP/2</td></tr>
  <tr><td>Strength</td><td>Cacheable, ubiquitous</td><td>No over- or under-fetching</td><td>Fast, streaming, codegen</td></tr>
</table>
<p>Common pairing: gRPC between internal services, REST or GraphQL at the public edge.</p>"#,
);

pub const OSI_MODEL: TopicContent = TopicContent::new(
    "osi-model",
    "OSI Model",
    r#"<table>
  <tr><th>Layer</th><th>Name</th><th>Examples</th></tr>
  <tr><td>7</td><td>Application</td><td>HTTP, DNS, SMTP</td></tr>
  <tr><td>6</td><td>Presentation</td><td>TLS, encoding</td></tr>
  <tr><td>5</td><td>Session</td><td>Session setup and teardown</td></tr>
  <tr><td>4</td><td>Transport</td><td>TCP, UDP</td></tr>
  <tr><td>3</td><td>Network</td><td>IP, ICMP</td></tr>
  <tr><td>2</td><td>Data link</td><td>Ethernet, ARP</td></tr>
  <tr><td>1</td><td>Physical</td><td>Cables, radio</td></tr>
</table>
<p>The TCP/IP model collapses layers 5 to 7 into a single application layer.</p>"#,
);

pub const ALL: &[TopicContent] = &[
    TCP_VS_UDP,
    DNS_RESOLUTION,
    HTTP_VERSIONS,
    WEBSOCKETS_VS_LONG_POLLING,
    REST_VS_GRAPHQL_VS_GRPC,
    OSI_MODEL,
];
