mod integration_dispatcher;
