//! The built-in operation table.
//!
//! One descriptor per remote operation the integration supports. Every
//! operation currently produces (request/response semantics) and none
//! consumes; the flags are kept per descriptor so the dispatch layer reads
//! them rather than assuming.

use super::params;
use crate::operations::domain::OperationDescriptor;
use crate::operations::domain::ParameterType::{Boolean, Integer, LongInteger, Text};

pub(super) fn builtin_operations() -> Vec<OperationDescriptor> {
    vec![
        OperationDescriptor::new("events", false, true)
            .with_parameter(params::INITIAL_RANGE, LongInteger),
        OperationDescriptor::new("auth", false, true)
            .with_parameter(params::USERNAME, Text)
            .with_parameter(params::PASSWORD, Text)
            .with_parameter(params::EMAIL, Text)
            .with_parameter(params::SERVER_ADDRESS, Text),
        OperationDescriptor::new("info", false, true),
        OperationDescriptor::new("ping", false, true),
        OperationDescriptor::new("version", false, true),
        OperationDescriptor::new("imagelist", false, true)
            .with_parameter(params::FILTER, Text)
            .with_parameter(params::SHOW_ALL, Boolean),
        OperationDescriptor::new("imagepull", false, true)
            .with_parameter(params::REGISTRY, Text)
            .with_parameter(params::TAG, Text)
            .with_parameter(params::REPOSITORY, Text),
        OperationDescriptor::new("imagepush", false, true)
            .with_parameter(params::NAME, Text)
            .with_parameter(params::USERNAME, Text)
            .with_parameter(params::PASSWORD, Text)
            .with_parameter(params::EMAIL, Text)
            .with_parameter(params::SERVER_ADDRESS, Text),
        OperationDescriptor::new("imagecreate", false, true)
            .with_parameter(params::REPOSITORY, Text),
        OperationDescriptor::new("imagesearch", false, true).with_parameter(params::TERM, Text),
        // noPrune is text here but boolean on imageinspect; mirrors the
        // remote API.
        OperationDescriptor::new("imageremove", false, true)
            .with_parameter(params::IMAGE_ID, Text)
            .with_parameter(params::FORCE, Boolean)
            .with_parameter(params::NO_PRUNE, Text),
        OperationDescriptor::new("imageinspect", false, true)
            .with_parameter(params::IMAGE_ID, Text)
            .with_parameter(params::NO_PRUNE, Boolean)
            .with_parameter(params::FORCE, Boolean),
        OperationDescriptor::new("containerlist", false, true)
            .with_parameter(params::LIMIT, Text)
            .with_parameter(params::SHOW_ALL, Boolean)
            .with_parameter(params::SHOW_SIZE, Boolean)
            .with_parameter(params::BEFORE, Text)
            .with_parameter(params::SINCE, Text),
        OperationDescriptor::new("containerwait", false, true)
            .with_parameter(params::CONTAINER_ID, Text),
        OperationDescriptor::new("inspectcontainer", false, true)
            .with_parameter(params::CONTAINER_ID, Text),
        OperationDescriptor::new("removecontainer", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::FORCE, Boolean)
            .with_parameter(params::REMOVE_VOLUMES, Boolean),
        OperationDescriptor::new("containerattach", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::FOLLOW_STREAM, Boolean)
            .with_parameter(params::TIMESTAMPS, Boolean)
            .with_parameter(params::STD_OUT, Boolean)
            .with_parameter(params::STD_ERR, Boolean)
            .with_parameter(params::LOGS, Boolean),
        OperationDescriptor::new("containerlog", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::FOLLOW_STREAM, Boolean)
            .with_parameter(params::TIMESTAMPS, Boolean)
            .with_parameter(params::STD_OUT, Boolean)
            .with_parameter(params::STD_ERR, Boolean)
            .with_parameter(params::TAIL, Integer)
            .with_parameter(params::TAIL_ALL, Boolean),
        OperationDescriptor::new("containercopyfile", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::RESOURCE, Text)
            .with_parameter(params::HOST_PATH, Text),
        OperationDescriptor::new("containerdiff", false, true)
            .with_parameter(params::CONTAINER_ID, Text),
        OperationDescriptor::new("containerstop", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::TIMEOUT, Integer),
        OperationDescriptor::new("containerkill", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::SIGNAL, Text),
        OperationDescriptor::new("containerrestart", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::TIMEOUT, Integer),
        OperationDescriptor::new("containertop", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::TIMEOUT, Integer),
        OperationDescriptor::new("imagetag", false, true)
            .with_parameter(params::IMAGE_ID, Text)
            .with_parameter(params::REPOSITORY, Text)
            .with_parameter(params::FORCE, Boolean),
        OperationDescriptor::new("containerpause", false, true)
            .with_parameter(params::CONTAINER_ID, Text),
        OperationDescriptor::new("containerunpause", false, true)
            .with_parameter(params::CONTAINER_ID, Text),
        OperationDescriptor::new("imagebuild", false, true)
            .with_parameter(params::NO_CACHE, Boolean)
            .with_parameter(params::REMOVE, Boolean)
            .with_parameter(params::QUIET, Boolean),
        OperationDescriptor::new("containercommit", false, true)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::REPOSITORY, Text)
            .with_parameter(params::TAG, Text)
            .with_parameter(params::MESSAGE, Text)
            .with_parameter(params::AUTHOR, Text)
            .with_parameter(params::ATTACH_STD_ERR, Boolean)
            .with_parameter(params::ATTACH_STD_IN, Boolean)
            .with_parameter(params::ATTACH_STD_OUT, Boolean)
            .with_parameter(params::PAUSE, Boolean)
            .with_parameter(params::ENV, Text)
            .with_parameter(params::HOSTNAME, Text)
            .with_parameter(params::MEMORY, Integer)
            .with_parameter(params::MEMORY_SWAP, Integer)
            .with_parameter(params::OPEN_STD_IN, Boolean)
            .with_parameter(params::PORT_SPECS, Text)
            .with_parameter(params::STD_IN_ONCE, Boolean)
            .with_parameter(params::TTY, Boolean)
            .with_parameter(params::WORKING_DIR, Text),
        OperationDescriptor::new("containercreate", false, true)
            .with_parameter(params::IMAGE_ID, Text)
            .with_parameter(params::NAME, Text)
            .with_parameter(params::WORKING_DIR, Text)
            .with_parameter(params::DISABLE_NETWORK, Boolean)
            .with_parameter(params::HOSTNAME, Text)
            .with_parameter(params::PORT_SPECS, Text)
            .with_parameter(params::USER, Text)
            .with_parameter(params::TTY, Boolean)
            .with_parameter(params::STD_IN_OPEN, Boolean)
            .with_parameter(params::STD_IN_ONCE, Boolean)
            .with_parameter(params::MEMORY_LIMIT, LongInteger)
            .with_parameter(params::MEMORY_SWAP, LongInteger)
            .with_parameter(params::CPU_SHARES, Integer)
            .with_parameter(params::ATTACH_STD_IN, Boolean)
            .with_parameter(params::ATTACH_STD_OUT, Boolean)
            .with_parameter(params::ATTACH_STD_ERR, Boolean)
            .with_parameter(params::ENV, Text)
            .with_parameter(params::CMD, Text)
            .with_parameter(params::DNS, Text)
            .with_parameter(params::IMAGE, Text)
            .with_parameter(params::VOLUMES_FROM, Text),
        OperationDescriptor::new("containerstart", false, true)
            .with_parameter(params::PUBLISH_ALL_PORTS, Boolean)
            .with_parameter(params::PRIVILEGED, Boolean)
            .with_parameter(params::DNS, Text)
            .with_parameter(params::DNS_SEARCH, Text)
            .with_parameter(params::CONTAINER_ID, Text)
            .with_parameter(params::VOLUMES_FROM, Text)
            .with_parameter(params::NETWORK_MODE, Text)
            .with_parameter(params::CAP_ADD, Text)
            .with_parameter(params::CAP_DROP, Text),
    ]
}
