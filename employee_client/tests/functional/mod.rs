mod http_employee_client;
