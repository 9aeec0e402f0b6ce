//! Wire names of the parameters accepted by built-in operations.
//!
//! Declared once and referenced by the built-in operation table, so the
//! table, validation, and any generated documentation all agree on the
//! exact spelling.

/// Initial range for the `events` stream.
pub const INITIAL_RANGE: &str = "initialRange";
/// Registry account user name.
pub const USERNAME: &str = "username";
/// Registry account password.
pub const PASSWORD: &str = "password";
/// Registry account email address.
pub const EMAIL: &str = "email";
/// Registry server address.
pub const SERVER_ADDRESS: &str = "serverAddress";
/// Listing filter expression.
pub const FILTER: &str = "filter";
/// Include non-running entries in listings.
pub const SHOW_ALL: &str = "showAll";
/// Image registry to pull from.
pub const REGISTRY: &str = "registry";
/// Image tag.
pub const TAG: &str = "tag";
/// Image repository.
pub const REPOSITORY: &str = "repository";
/// Image or container name.
pub const NAME: &str = "name";
/// Image search term.
pub const TERM: &str = "term";
/// Image identifier.
pub const IMAGE_ID: &str = "imageId";
/// Force the operation.
pub const FORCE: &str = "force";
/// Skip pruning of untagged parents.
pub const NO_PRUNE: &str = "noPrune";
/// Maximum number of entries to list.
pub const LIMIT: &str = "limit";
/// Include size information in listings.
pub const SHOW_SIZE: &str = "showSize";
/// List only containers created before this one.
pub const BEFORE: &str = "before";
/// List only containers created since this one.
pub const SINCE: &str = "since";
/// Container identifier.
pub const CONTAINER_ID: &str = "containerId";
/// Remove volumes along with the container.
pub const REMOVE_VOLUMES: &str = "removeVolumes";
/// Keep following the output stream.
pub const FOLLOW_STREAM: &str = "followStream";
/// Prefix output lines with timestamps.
pub const TIMESTAMPS: &str = "timestamps";
/// Attach standard output.
pub const STD_OUT: &str = "stdOut";
/// Attach standard error.
pub const STD_ERR: &str = "stdErr";
/// Include previous log output when attaching.
pub const LOGS: &str = "logs";
/// Number of trailing log lines to return.
pub const TAIL: &str = "tail";
/// Return all log lines.
pub const TAIL_ALL: &str = "tailAll";
/// Resource path inside the container.
pub const RESOURCE: &str = "resource";
/// Destination path on the host.
pub const HOST_PATH: &str = "hostPath";
/// Seconds to wait before killing a container.
pub const TIMEOUT: &str = "timeout";
/// Signal to send to a container.
pub const SIGNAL: &str = "signal";
/// Disable the build cache.
pub const NO_CACHE: &str = "noCache";
/// Remove intermediate containers after the build.
pub const REMOVE: &str = "remove";
/// Suppress verbose build output.
pub const QUIET: &str = "quiet";
/// Commit message.
pub const MESSAGE: &str = "message";
/// Commit author.
pub const AUTHOR: &str = "author";
/// Attach standard error on commit.
pub const ATTACH_STD_ERR: &str = "attachStdErr";
/// Attach standard input on commit.
pub const ATTACH_STD_IN: &str = "attachStdIn";
/// Attach standard output on commit.
pub const ATTACH_STD_OUT: &str = "attachStdOut";
/// Pause the container while committing.
pub const PAUSE: &str = "pause";
/// Environment variable assignments.
pub const ENV: &str = "env";
/// Container hostname.
pub const HOSTNAME: &str = "hostname";
/// Memory limit for the committed configuration.
pub const MEMORY: &str = "memory";
/// Total memory plus swap limit.
pub const MEMORY_SWAP: &str = "memorySwap";
/// Keep standard input open.
pub const OPEN_STD_IN: &str = "openStdIn";
/// Port specifications.
pub const PORT_SPECS: &str = "portSpecs";
/// Close standard input after the first attached client disconnects.
pub const STD_IN_ONCE: &str = "stdInOnce";
/// Allocate a pseudo-terminal.
pub const TTY: &str = "tty";
/// Working directory inside the container.
pub const WORKING_DIR: &str = "workingDir";
/// Disable networking for the container.
pub const DISABLE_NETWORK: &str = "disableNetwork";
/// User to run the container as.
pub const USER: &str = "user";
/// Keep standard input open at creation.
pub const STD_IN_OPEN: &str = "stdInOpen";
/// Memory limit in bytes at creation.
pub const MEMORY_LIMIT: &str = "memoryLimit";
/// Relative CPU share weight.
pub const CPU_SHARES: &str = "cpuShares";
/// Command to run in the container.
pub const CMD: &str = "cmd";
/// Custom DNS servers.
pub const DNS: &str = "dns";
/// Image to create the container from.
pub const IMAGE: &str = "image";
/// Mount volumes from these containers.
pub const VOLUMES_FROM: &str = "volumesFrom";
/// Publish all exposed ports to random host ports.
pub const PUBLISH_ALL_PORTS: &str = "publishAllPorts";
/// Give extended privileges to the container.
pub const PRIVILEGED: &str = "privileged";
/// Custom DNS search domains.
pub const DNS_SEARCH: &str = "dnsSearch";
/// Network mode for the container.
pub const NETWORK_MODE: &str = "networkMode";
/// Kernel capabilities to add.
pub const CAP_ADD: &str = "capAdd";
/// Kernel capabilities to drop.
pub const CAP_DROP: &str = "capDrop";
