mod change_handler;
