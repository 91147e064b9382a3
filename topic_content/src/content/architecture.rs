//! System architecture and scalability.

use super::TopicContent;

pub const LOAD_BALANCING: TopicContent = TopicContent::new(
    "load-balancing",
    "Load Balancing",
    r#"<h3>Definition</h3>
<p>A load balancer spreads incoming requests across a pool of backend servers to improve throughput and availability.</p>
<h3>Algorithms</h3>
<ul>
  <li>Round robin and weighted round robin</li>
  <li>Least connections</li>
  <li>IP hash / consistent hashing for session affinity</li>
  <li>Power of two random choices</li>
</ul>
<h3>Layers</h3>
<table>
  <tr><th>L4</th><th>L7</th></tr>
  <tr><td>Routes on IP and port, very fast</td><td>Routes on HTTP path, headers or cookies; can terminate TLS</td></tr>
</table>
<p>Health checks remove failed backends from rotation.</p>"#,
);

pub const HORIZONTAL_VS_VERTICAL_SCALING: TopicContent = TopicContent::new(
    "horizontal-vs-vertical-scaling",
    "Horizontal vs Vertical Scaling",
    r#"<h3>Comparison</h3>
<table>
  <tr><th></th><th>Vertical (scale up)</th><th>Horizontal (scale out)</th></tr>
  <tr><td>How</td><td>Bigger machine</td><td>More machines</td></tr>
  <tr><td>Limit</td><td>Hardware ceiling</td><td>Practically unbounded</td></tr>
  <tr><td>Complexity</td><td>Low</td><td>Needs load balancing and stateless services</td></tr>
  <tr><td>Failure</td><td>Single point of failure</td><td>Redundant</td></tr>
</table>
<p>Stateless application tiers scale horizontally; stateful tiers need sharding or replication to do the same.</p>"#,
);

pub const MICROSERVICES_VS_MONOLITH: TopicContent = TopicContent::new(
    "microservices-vs-monolith",
    "Microservices vs Monolith",
    r#"<h3>Monolith</h3>
<p>One deployable unit. Simple to develop, test and deploy early on; harder to scale teams and components independently.</p>
<h3>Microservices</h3>
<p>Independently deployable services organised around business capabilities, each owning its data.</p>
<ul>
  <li>Pros: independent scaling and deployment, technology freedom, fault isolation.</li>
  <li>Cons: network latency, distributed transactions, operational overhead, harder debugging.</li>
</ul>
<p>A modular monolith is a common intermediate step.</p>"#,
);

pub const EVENT_DRIVEN_ARCHITECTURE: TopicContent = TopicContent::new(
    "event-driven-architecture",
    "Event-Driven Architecture",
    r#"<h3>Definition</h3>
<p>Components communicate by producing and consuming events through a broker instead of calling each other directly.</p>
<ul>
  <li><strong>Event notification</strong>: a thin event tells consumers something happened.</li>
  <li><strong>Event-carried state transfer</strong>: the event carries the data consumers need.</li>
  <li><strong>Event sourcing</strong>: the event log is the source of truth; state is a fold over it.</li>
</ul>
<p>Benefits are loose coupling and independent scaling; costs are eventual consistency and harder tracing of a request across services.</p>"#,
);

pub const CQRS: TopicContent = TopicContent::new(
    "cqrs",
    "CQRS",
    r#"<h3>Definition</h3>
<p>Command Query Responsibility Segregation separates the model that handles writes (commands) from the model that serves reads (queries).</p>
<ul>
  <li>Write side validates commands and emits events.</li>
  <li>Read side builds denormalized projections optimised for each query.</li>
</ul>
<p>Often paired with event sourcing. Adds complexity, so apply it to the parts of a system where read and write workloads really differ.</p>"#,
);

pub const API_GATEWAY: TopicContent = TopicContent::new(
    "api-gateway",
    "API Gateway",
    r#"<h3>Definition</h3>
<p>An API gateway is the single entry point in front of a set of backend services.</p>
<h3>Responsibilities</h3>
<ul>
  <li>Request routing and composition</li>
  <li>Authentication and authorization</li>
  <li>Rate limiting and quotas</li>
  <li>TLS termination, caching, request and response transformation</li>
</ul>
<p>Examples: Kong, AWS API Gateway, Envoy. The Backend-for-Frontend pattern runs one gateway per client type.</p>"#,
);

pub const ALL: &[TopicContent] = &[
    LOAD_BALANCING,
    HORIZONTAL_VS_VERTICAL_SCALING,
    MICROSERVICES_VS_MONOLITH,
    EVENT_DRIVEN_ARCHITECTURE,
    CQRS,
    API_GATEWAY,
];
