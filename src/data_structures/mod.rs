pub mod link_node;
